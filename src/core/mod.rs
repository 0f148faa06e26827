// Public modules
pub mod config;
pub mod error;
pub mod executor;
pub mod files;
pub mod partials;
pub mod postprocess;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use executor::{CommandRunner, SystemRunner};
pub use postprocess::{PostProcessor, RunReport, StepKind, StepReport, StepStatus};
