use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchdeck")]
#[command(about = "Product showcase TUI with an animated boot sequence", long_about = None)]
pub struct Cli {
    /// Deck file to present (defaults to the bundled deck)
    #[arg(value_name = "DECK")]
    pub deck: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start the boot sequence animating on launch (overrides config)
    #[arg(long, conflicts_with = "no_autoplay")]
    pub autoplay: bool,

    /// Don't start the boot sequence on launch (overrides config)
    #[arg(long, conflicts_with = "autoplay")]
    pub no_autoplay: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the boot-sequence steps of a deck
    Steps {
        /// Deck file (defaults to the bundled deck)
        deck: Option<PathBuf>,

        /// Emit JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Validate a deck file without launching the TUI
    CheckDeck {
        /// Path to the deck file
        file: PathBuf,
    },

    /// Print recorded access requests
    Waitlist,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
