use crate::cli::{Cli, Commands};
use launchdeck::{access, config, deck, ui};
use std::path::Path;
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Steps { deck, json } => handle_steps(deck, json),
            Commands::CheckDeck { file } => handle_check_deck(file),
            Commands::Waitlist => handle_waitlist(),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = config::Config::load().unwrap_or_default();

    let autoplay = if cli.autoplay {
        Some(true)
    } else if cli.no_autoplay {
        Some(false)
    } else {
        None // Use config default
    };

    // Deck priority: CLI arg > config > bundled
    let deck_path = cli
        .deck
        .clone()
        .or_else(|| config.defaults.deck.as_ref().map(Into::into));
    let deck = load_deck(deck_path.as_deref());

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui_with_options(deck, autoplay, &config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn load_deck(path: Option<&Path>) -> deck::Deck {
    let result = match path {
        Some(p) => deck::Deck::load(p),
        None => deck::Deck::builtin(),
    };

    match result {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("Error loading deck: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_steps(deck_path: Option<std::path::PathBuf>, json: bool) {
    let deck = load_deck(deck_path.as_deref());

    if json {
        match serde_json::to_string_pretty(&deck.boot.steps) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        for (i, step) in deck.boot.steps.iter().enumerate() {
            println!("{:>2}. {}", i + 1, step);
        }
    }
}

fn handle_check_deck(file: std::path::PathBuf) {
    match deck::Deck::load(&file) {
        Ok(deck) => {
            println!(
                "Deck OK: {} sections, {} boot steps",
                deck.sections.len(),
                deck.boot.steps.len()
            );
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_waitlist() {
    let waitlist = match access::Waitlist::default_location() {
        Ok(waitlist) => waitlist,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    match waitlist.load() {
        Ok(requests) if requests.is_empty() => {
            println!("No access requests recorded yet.");
        }
        Ok(requests) => {
            for request in &requests {
                println!(
                    "{}  {}  {}",
                    request.requested_at.format("%Y-%m-%d %H:%M:%S"),
                    request.id,
                    request.email
                );
            }
            println!("Total requests: {}", requests.len());
        }
        Err(e) => {
            eprintln!("Error reading waitlist: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}
