use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Element with ID `{id}` was not found in the original document")]
    #[diagnostic(
        code(relocate::original_element_not_found),
        help("Pass the ID of an element that exists in the original document.")
    )]
    OriginalElementNotFound { id: String },

    #[error("No element matching `{id}` was found in the target document")]
    #[diagnostic(
        code(relocate::no_match_found),
        help("Neither the ID nor any attribute or text of the original element matched. Fallback query: {query}")
    )]
    NoMatchFound { id: String, query: String },
}
