//! HTML document model used by relocate.
//!
//! Parses a document into memory and exposes the operations element resolution needs:
//! lookup by `id`, structural queries in document order, attribute/text/markup access and
//! positional XPath computation.
//!
//! ```rust
//! use relocate_html::{Document, Query, TagFilter};
//!
//! let document = Document::parse(r#"<body><a class="btn" href="/ok">OK</a></body>"#).unwrap();
//! let query = Query::new(TagFilter::Name("a".to_string())).with_text("OK");
//! let nodes = document.query(&query);
//! assert_eq!(nodes[0].xpath(), "/html[1]/body[1]/a[1]");
//! ```
pub mod document;
pub mod error;
pub mod node;
pub mod query;

pub use document::{Document, ParseOptions};
pub use error::HtmlError;
pub use node::Node;
pub use query::{Predicate, Query, TagFilter, xpath_literal};
