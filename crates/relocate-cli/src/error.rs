use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("{hint} is not found in the destination path: `{}`", path.display())]
    #[diagnostic(
        code(relocate::cli::file_not_found),
        help("Usage: relocate <ORIGINAL> <TARGET> [TARGET_ID]")
    )]
    FileNotFound { hint: &'static str, path: PathBuf },

    #[error("Failed to write the result to `{}`: {source}", path.display())]
    #[diagnostic(code(relocate::cli::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
