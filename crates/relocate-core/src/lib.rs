//! Element resolution across two versions of an HTML document.
//!
//! Given an element identified by its `id` in an *original* document, find the corresponding
//! element in a *target* document and report its XPath:
//!
//! 1. If the target has an element with the same `id`, that element wins outright.
//! 2. Otherwise a fallback query selects `<a>` elements sharing any attribute (exact name and
//!    value) or the exact rendered text of the original element.
//! 3. A single candidate is returned as is; several candidates are scored by
//!    [`scorer::score`] and the first one with the highest score is returned.
//!
//! ```rust
//! use relocate_core::resolve;
//! use relocate_html::Document;
//!
//! let original = Document::parse(r#"<body><a id="btn" class="primary" href="/ok">Click</a></body>"#).unwrap();
//! let target = Document::parse(
//!     r#"<body><a class="primary" href="/no">Click</a><a class="primary" href="/ok">Click</a></body>"#,
//! )
//! .unwrap();
//!
//! assert_eq!(resolve(&original, &target, "btn").unwrap(), "/html[1]/body[1]/a[2]");
//! ```
pub mod error;
pub mod query_builder;
pub mod resolver;
pub mod scorer;

pub use error::ResolveError;
pub use query_builder::{ANCHOR_TAG, CandidateTag, build_candidate_query};
pub use resolver::{
    DEFAULT_TARGET_ID, Resolution, ResolveOptions, Resolver, ScoredCandidate, Strategy, resolve,
};
pub use scorer::score;
