//! khazanah-common: entry model, configuration and errors shared by the
//! khazanah tools.

pub mod config;
pub mod entry;
pub mod error;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use config::{Config, OutputFormat, default_config_path};
pub use entry::{EntryType, FiqhEntry, SourceBook};
pub use error::{KhazanahError, ValidationErrors, ValidationIssue};
