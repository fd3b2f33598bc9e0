use std::collections::HashSet;
use std::fs;

fn main() {
    // Tell Cargo to rerun if the bundled deck changes
    println!("cargo:rerun-if-changed=src/deck/default-deck.toml");

    let contents = fs::read_to_string("src/deck/default-deck.toml")
        .expect("Failed to read default-deck.toml");

    let deck: toml::Value = toml::from_str(&contents).expect("Failed to parse default-deck.toml");

    validate_deck(&deck);
}

/// Validate the bundled deck's structure at build time so a bad edit fails
/// the build instead of the first launch.
fn validate_deck(deck: &toml::Value) {
    let meta = deck
        .get("meta")
        .and_then(|m| m.as_table())
        .expect("Deck must have a [meta] section");

    assert!(meta.get("schema_version").is_some(), "Missing schema_version in [meta]");
    assert!(meta.get("brand").is_some(), "Missing brand in [meta]");

    let boot = deck
        .get("boot")
        .and_then(|b| b.as_table())
        .expect("Deck must have a [boot] section");

    let steps = boot
        .get("steps")
        .and_then(|s| s.as_array())
        .expect("[boot] must have a steps array");
    assert!(!steps.is_empty(), "Boot sequence must define at least one step");

    for step in steps {
        let label = step.as_str().expect("Boot steps must be strings");
        assert!(!label.trim().is_empty(), "Boot steps must not be blank");
    }

    if let Some(interval) = boot.get("interval_ms").and_then(|v| v.as_integer()) {
        assert!(interval > 0, "Boot interval_ms must be greater than zero");
    }

    let sections = deck
        .get("sections")
        .and_then(|s| s.as_array())
        .expect("Deck must have a [[sections]] array");
    assert!(!sections.is_empty(), "Deck must define at least one section");

    let mut section_ids = HashSet::new();

    for section in sections {
        let table = section.as_table().expect("Section must be a table");

        let id = table
            .get("id")
            .and_then(|v| v.as_str())
            .expect("Section must have an 'id' field");
        assert!(section_ids.insert(id), "Duplicate section id: {}", id);

        assert!(
            table.get("title").is_some(),
            "Section '{}' missing 'title' field",
            id
        );

        if let Some(ticker) = table.get("ticker").and_then(|t| t.as_table()) {
            let commands = ticker
                .get("commands")
                .and_then(|c| c.as_array())
                .unwrap_or_else(|| panic!("Ticker in section '{}' must have 'commands'", id));
            assert!(
                !commands.is_empty(),
                "Ticker in section '{}' must not be empty",
                id
            );

            if let Some(interval) = ticker.get("interval_ms").and_then(|v| v.as_integer()) {
                assert!(
                    interval > 0,
                    "Ticker interval_ms in section '{}' must be greater than zero",
                    id
                );
            }
        }
    }

    println!(
        "cargo:warning=Deck validation passed: {} sections, {} boot steps",
        section_ids.len(),
        steps.len()
    );
}
