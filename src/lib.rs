pub mod config;
pub mod core;
pub mod utils;

pub use config::{CliConfig, Config};
pub use core::{run_interactive, CapabilityReport, Server, INTERACTIVE_MODE_SUPPORTED};
pub use utils::error::{AcvpError, Result};
