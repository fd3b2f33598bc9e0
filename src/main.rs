mod app;
mod cli;

fn main() {
    init_logging();

    let cli = cli::parse();
    app::run(cli);
}

/// Route diagnostics to a file; stdout belongs to the TUI.
#[cfg(feature = "dev-logging")]
fn init_logging() {
    use std::sync::Mutex;

    match std::fs::File::create("launchdeck.log") {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_max_level(tracing::Level::TRACE)
                .with_writer(Mutex::new(file))
                .init();
        }
        Err(e) => {
            eprintln!("Warning: could not create launchdeck.log: {}", e);
        }
    }
}

#[cfg(not(feature = "dev-logging"))]
fn init_logging() {}
