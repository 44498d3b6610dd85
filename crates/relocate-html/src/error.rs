use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HtmlError {
    #[error("An error occurred when loading the document `{}`: {source}", path.display())]
    #[diagnostic(
        code(relocate_html::io),
        help("Check that the file exists, is readable and is UTF-8 encoded.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTML parsing error: {message} ({count} error(s) in total)")]
    #[diagnostic(
        code(relocate_html::parse),
        help("The document is not well-formed HTML. Run without strict parsing to let the parser recover.")
    )]
    Parse { message: String, count: usize },
}
