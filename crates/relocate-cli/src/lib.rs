//! Command-line driver for relocate.
//!
//! Loads the original and target documents, resolves the element and reports its XPath on
//! stdout and in `<output-dir>/<target stem>.txt`. Any failure is reported as a diagnostic
//! and the process exits with status 1.
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use config::Config;
pub use error::CliError;
pub use logging::init_tracing;
