// Showcase content model - sections, boot sequence, tickers

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const BUILTIN_DECK: &str = include_str!("default-deck.toml");

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse deck: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("deck must define at least one section")]
    NoSections,

    #[error("duplicate section id '{0}'")]
    DuplicateSection(String),

    #[error("boot sequence must define at least one step")]
    EmptyBootSteps,

    #[error("boot interval must be greater than zero")]
    ZeroBootInterval,

    #[error("section '{0}' has an empty ticker command list")]
    EmptyTicker(String),

    #[error("section '{0}' ticker interval must be greater than zero")]
    ZeroTickerInterval(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    pub meta: Meta,
    pub boot: BootSequence,

    /// Defaults to empty so a missing table reports `NoSections` instead of
    /// a parse error.
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    pub brand: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub docs_url: String,

    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootSequence {
    #[serde(default = "default_boot_interval_ms")]
    pub interval_ms: u64,

    /// Wrap back to step 0 after the last step; saturate there otherwise.
    #[serde(default = "default_true", rename = "loop")]
    pub looped: bool,

    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,

    /// Accent color name, resolved by the UI layer.
    #[serde(default = "default_accent")]
    pub accent: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub body: Vec<String>,

    #[serde(default)]
    pub bullets: Vec<String>,

    #[serde(default)]
    pub ticker: Option<Ticker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    #[serde(default = "default_ticker_interval_ms")]
    pub interval_ms: u64,

    pub commands: Vec<String>,
}

fn default_schema_version() -> String {
    "1".to_string()
}

fn default_boot_interval_ms() -> u64 {
    1800
}

fn default_ticker_interval_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_accent() -> String {
    "white".to_string()
}

impl Deck {
    /// The deck bundled with the binary.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_toml(BUILTIN_DECK)
    }

    pub fn from_toml(contents: &str) -> Result<Self, DeckError> {
        let deck: Deck = toml::from_str(contents)?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    fn validate(&self) -> Result<(), DeckError> {
        if self.sections.is_empty() {
            return Err(DeckError::NoSections);
        }

        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(DeckError::DuplicateSection(section.id.clone()));
            }

            if let Some(ticker) = &section.ticker {
                if ticker.commands.is_empty() {
                    return Err(DeckError::EmptyTicker(section.id.clone()));
                }
                if ticker.interval_ms == 0 {
                    return Err(DeckError::ZeroTickerInterval(section.id.clone()));
                }
            }
        }

        if self.boot.steps.is_empty() {
            return Err(DeckError::EmptyBootSteps);
        }
        if self.boot.interval_ms == 0 {
            return Err(DeckError::ZeroBootInterval);
        }

        Ok(())
    }

    pub fn boot_interval(&self) -> Duration {
        Duration::from_millis(self.boot.interval_ms)
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

impl Ticker {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_is_valid() {
        let deck = Deck::builtin().unwrap();
        assert!(deck.sections.len() >= 2);
        assert!(!deck.boot.steps.is_empty());
        assert!(deck.boot.looped);
        assert_eq!(deck.boot.interval_ms, 1800);
    }

    #[test]
    fn rejects_deck_without_sections() {
        let toml = r#"
            [meta]
            brand = "x"

            [boot]
            steps = ["a"]
        "#;
        assert!(matches!(
            Deck::from_toml(toml),
            Err(DeckError::NoSections)
        ));
    }

    #[test]
    fn rejects_empty_boot_steps() {
        let toml = r#"
            [meta]
            brand = "x"

            [boot]
            steps = []

            [[sections]]
            id = "home"
            title = "Home"
        "#;
        assert!(matches!(
            Deck::from_toml(toml),
            Err(DeckError::EmptyBootSteps)
        ));
    }

    #[test]
    fn rejects_duplicate_section_ids() {
        let toml = r#"
            [meta]
            brand = "x"

            [boot]
            steps = ["a"]

            [[sections]]
            id = "home"
            title = "Home"

            [[sections]]
            id = "home"
            title = "Again"
        "#;
        assert!(matches!(
            Deck::from_toml(toml),
            Err(DeckError::DuplicateSection(id)) if id == "home"
        ));
    }
}
