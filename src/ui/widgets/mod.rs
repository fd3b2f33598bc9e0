// Custom widgets for the TUI

pub mod steps;

pub use steps::StepList;
