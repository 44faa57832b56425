pub mod interactive;
pub mod report;
pub mod server;

pub use crate::utils::error::Result;
pub use interactive::{run_interactive, INTERACTIVE_MODE_SUPPORTED};
pub use report::CapabilityReport;
pub use server::Server;
