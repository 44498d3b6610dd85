use ego_tree::NodeRef;
use itertools::Itertools;
use scraper::ElementRef;

/// A read-only view of one element of a [`crate::Document`].
///
/// Nodes borrow from the document that produced them, so they cannot outlive it.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Lower-cased local tag name, e.g. `a`.
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.element.value().attrs()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes().count()
    }

    /// Rendered text: every descendant text node concatenated, markup stripped.
    pub fn inner_text(&self) -> String {
        self.element.text().collect()
    }

    /// Serialized markup of the element's children.
    pub fn inner_markup(&self) -> String {
        self.element.inner_html()
    }

    /// Exact comparison of the rendered text against `text`. No whitespace or case folding.
    pub fn text_equals(&self, text: &str) -> bool {
        self.inner_text() == text
    }

    /// Exact comparison of the raw inner markup of two nodes.
    pub fn markup_equals(&self, other: &Node<'_>) -> bool {
        self.inner_markup() == other.inner_markup()
    }

    /// Absolute positional path such as `/html[1]/body[1]/div[2]/a[1]`.
    ///
    /// Each step is indexed among the preceding element siblings sharing the same tag name.
    pub fn xpath(&self) -> String {
        let steps = std::iter::once(*self.element)
            .chain(self.element.ancestors())
            .filter_map(|node| {
                let name = node.value().as_element()?.name();
                Some(format!("{}[{}]", name, sibling_position(node, name)))
            })
            .collect::<Vec<_>>();

        format!("/{}", steps.into_iter().rev().join("/"))
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        (*self.element).id() == (*other.element).id()
    }
}

impl Eq for Node<'_> {}

fn sibling_position(node: NodeRef<'_, scraper::Node>, name: &str) -> usize {
    1 + node
        .prev_siblings()
        .filter(|sibling| {
            sibling
                .value()
                .as_element()
                .is_some_and(|element| element.name() == name)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use crate::Document;
    use rstest::rstest;

    const PAGE: &str = r#"<html><head><title>t</title></head><body>
        <div id="first"><a id="one" class="btn" href="/a">One</a></div>
        <div id="second">
            <span>skip</span>
            <a id="two">Two</a>
            <a id="three" title="x"><b>Three</b> more</a>
        </div>
    </body></html>"#;

    #[rstest]
    #[case("one", "/html[1]/body[1]/div[1]/a[1]")]
    #[case("two", "/html[1]/body[1]/div[2]/a[1]")]
    #[case("three", "/html[1]/body[1]/div[2]/a[2]")]
    #[case("second", "/html[1]/body[1]/div[2]")]
    fn test_xpath(#[case] id: &str, #[case] expected: &str) {
        let document = Document::parse(PAGE).unwrap();
        let node = document.find_by_id(id).unwrap();
        assert_eq!(node.xpath(), expected);
    }

    #[test]
    fn test_xpath_is_unique() {
        let document = Document::parse(PAGE).unwrap();
        let paths = document.elements().map(|node| node.xpath()).collect::<Vec<_>>();
        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(paths.len(), deduped.len());
    }

    #[test]
    fn test_attributes() {
        let document = Document::parse(PAGE).unwrap();
        let node = document.find_by_id("one").unwrap();

        assert_eq!(node.tag_name(), "a");
        assert_eq!(node.attribute_count(), 3);
        assert_eq!(node.attribute("class"), Some("btn"));
        assert_eq!(node.attribute("href"), Some("/a"));
        assert_eq!(node.attribute("missing"), None);
    }

    #[test]
    fn test_text_and_markup() {
        let document = Document::parse(PAGE).unwrap();
        let node = document.find_by_id("three").unwrap();

        assert_eq!(node.inner_text(), "Three more");
        assert_eq!(node.inner_markup(), "<b>Three</b> more");
        assert!(node.text_equals("Three more"));
        assert!(!node.text_equals("three more"));
        assert!(!node.text_equals(" Three more"));
    }

    #[test]
    fn test_markup_equals_is_not_text_equals() {
        let document = Document::parse(
            r#"<body><a id="x"><b>Go</b></a><a id="y">Go</a><a id="z"><b>Go</b></a></body>"#,
        )
        .unwrap();
        let x = document.find_by_id("x").unwrap();
        let y = document.find_by_id("y").unwrap();
        let z = document.find_by_id("z").unwrap();

        assert_eq!(x.inner_text(), y.inner_text());
        assert!(!x.markup_equals(&y));
        assert!(x.markup_equals(&z));
    }
}
