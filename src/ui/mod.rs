// Terminal UI using Ratatui

pub mod access;
pub mod components;
pub mod constants;
pub mod events;
pub mod header;
pub mod menu;
pub mod sections;
pub mod state;
pub mod widgets;

pub use access::AccessModal;
pub use events::{run_ui, run_ui_with_options};
pub use header::Header;
pub use menu::MenuOverlay;
pub use sections::SectionView;
pub use state::AppState;
