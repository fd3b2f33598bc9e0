// UI color and glyph constants - single source of truth
// Accent names here must match the values used in deck files

use ratatui::style::Color;

/// Resolve a deck accent name to a terminal color. Unknown names fall back
/// to white rather than failing the render.
pub fn accent_color(name: &str) -> Color {
    match name {
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "light_magenta" => Color::LightMagenta,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        "green" => Color::Green,
        "red" => Color::Red,
        "white" => Color::White,
        _ => Color::White,
    }
}

// Step glyphs: completed and current steps get the filled check, upcoming
// steps the hollow marker
pub const GLYPH_STEP_DONE: &str = "✔";
pub const GLYPH_STEP_UPCOMING: &str = "○";

// Bullet marker for section feature lists
pub const GLYPH_BULLET: &str = "▸";

// Prompt prefix for ticker command lines
pub const GLYPH_PROMPT: &str = "❯";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_accents_all_resolve() {
        let deck = crate::deck::Deck::builtin().unwrap();
        for section in &deck.sections {
            // Unknown accents fall back to white; the bundled deck should
            // only use named colors
            if section.accent != "white" {
                assert_ne!(
                    accent_color(&section.accent),
                    Color::White,
                    "section '{}' uses unmapped accent '{}'",
                    section.id,
                    section.accent
                );
            }
        }
    }
}
