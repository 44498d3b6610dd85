use crate::{HtmlError, Node, Query};
use scraper::{ElementRef, Html};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Reject documents the parser had to recover from instead of accepting the repaired tree.
    pub strict: bool,
}

/// A fully parsed HTML document held in memory.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Result<Self, HtmlError> {
        Self::parse_with(source, ParseOptions::default())
    }

    pub fn parse_with(source: &str, options: ParseOptions) -> Result<Self, HtmlError> {
        let html = Html::parse_document(source);

        if let Some(first) = html.errors.first() {
            if options.strict {
                return Err(HtmlError::Parse {
                    message: first.to_string(),
                    count: html.errors.len(),
                });
            }
            tracing::debug!(
                "Parser recovered from {} error(s), first: {}",
                html.errors.len(),
                first
            );
        }

        Ok(Self { html })
    }

    pub fn load(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, HtmlError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| HtmlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded {} bytes from {}", source.len(), path.display());

        Self::parse_with(&source, options)
    }

    /// Every element of the document in document order.
    pub fn elements(&self) -> impl Iterator<Item = Node<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(Node::new)
    }

    /// First element in document order whose `id` attribute is exactly `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Node<'_>> {
        self.elements().find(|node| node.attribute("id") == Some(id))
    }

    /// Elements matching `query`, in document order.
    pub fn query(&self, query: &Query) -> Vec<Node<'_>> {
        self.elements().filter(|node| query.matches(node)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagFilter;
    use rstest::rstest;

    const PAGE: &str = r#"<!DOCTYPE html><html><body>
        <a id="dup" class="first">First</a>
        <div><a id="dup" class="second">Second</a></div>
        <a class="btn" href="/ok">OK</a>
        <button class="btn">OK</button>
        <a title="it's &quot;quoted&quot;">Quoted</a>
    </body></html>"#;

    #[test]
    fn test_find_by_id_returns_first_in_document_order() {
        let document = Document::parse(PAGE).unwrap();
        let node = document.find_by_id("dup").unwrap();
        assert_eq!(node.attribute("class"), Some("first"));
    }

    #[rstest]
    #[case("missing")]
    #[case("DUP")]
    #[case("")]
    fn test_find_by_id_absent(#[case] id: &str) {
        let document = Document::parse(PAGE).unwrap();
        assert!(document.find_by_id(id).is_none());
    }

    #[test]
    fn test_query_filters_by_tag_and_keeps_document_order() {
        let document = Document::parse(PAGE).unwrap();
        let query = Query::new(TagFilter::Name("a".to_string()))
            .with_attribute("class", "btn")
            .with_text("Second");

        let nodes = document.query(&query);
        let paths = nodes.iter().map(|node| node.xpath()).collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec!["/html[1]/body[1]/div[1]/a[1]", "/html[1]/body[1]/a[2]"]
        );
    }

    #[test]
    fn test_query_any_tag() {
        let document = Document::parse(PAGE).unwrap();
        let query = Query::new(TagFilter::Any).with_text("OK");

        let tags = document
            .query(&query)
            .iter()
            .map(|node| node.tag_name())
            .collect::<Vec<_>>();
        assert_eq!(tags, vec!["a", "button"]);
    }

    #[test]
    fn test_query_matches_values_with_quotes() {
        let document = Document::parse(PAGE).unwrap();
        let query = Query::new(TagFilter::Name("a".to_string()))
            .with_attribute("title", "it's \"quoted\"");

        let nodes = document.query(&query);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].text_equals("Quoted"));
    }

    #[test]
    fn test_query_without_predicates_matches_nothing() {
        let document = Document::parse(PAGE).unwrap();
        let query = Query::new(TagFilter::Name("a".to_string()));
        assert!(document.query(&query).is_empty());
    }

    #[test]
    fn test_strict_parse_rejects_recovered_markup() {
        let source = "<!DOCTYPE html><html><body></p></div></body></html>";

        assert!(Document::parse(source).is_ok());
        let result = Document::parse_with(source, ParseOptions { strict: true });
        assert!(matches!(result, Err(HtmlError::Parse { count, .. }) if count > 0));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Document::load("/definitely/not/here.html", ParseOptions::default());
        assert!(matches!(result, Err(HtmlError::Io { .. })));
    }
}
