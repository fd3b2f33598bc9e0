// Step sequencing core - independent of UI

pub mod stepper;
pub mod ticker;

pub use stepper::{SequencerError, StepSequencer, StepStatus};
pub use ticker::CommandTicker;
