use relocate_html::{Node, Query, TagFilter};
use serde::Serialize;

/// Tag of the hyperlink-like elements searched by the fallback query.
pub const ANCHOR_TAG: &str = "a";

/// Tag family the fallback query searches in the target document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateTag {
    /// Only `<a>` elements, whatever the original element's tag is.
    #[default]
    Anchor,
    /// Elements with the same tag name as the original element.
    Original,
}

impl CandidateTag {
    fn filter(self, original: &Node<'_>) -> TagFilter {
        match self {
            CandidateTag::Anchor => TagFilter::Name(ANCHOR_TAG.to_string()),
            CandidateTag::Original => TagFilter::Name(original.tag_name().to_string()),
        }
    }
}

/// Builds the query selecting elements that share any attribute (name and exact value) or
/// the exact rendered text of `original`.
pub fn build_candidate_query(original: &Node<'_>, tag: CandidateTag) -> Query {
    original
        .attributes()
        .fold(Query::new(tag.filter(original)), |query, (name, value)| {
            query.with_attribute(name, value)
        })
        .with_text(original.inner_text())
}
