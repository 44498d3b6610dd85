use crate::Node;
use itertools::Itertools;
use std::fmt::{self, Display};

/// Which elements a [`Query`] considers before its predicates are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    Any,
    Name(String),
}

impl TagFilter {
    fn matches(&self, node: &Node<'_>) -> bool {
        match self {
            TagFilter::Any => true,
            TagFilter::Name(name) => node.tag_name().eq_ignore_ascii_case(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// An attribute named `name` whose value is exactly `value`.
    AttributeEquals { name: String, value: String },
    /// Rendered inner text exactly equal to the given string.
    TextEquals(String),
}

impl Predicate {
    pub fn matches(&self, node: &Node<'_>) -> bool {
        match self {
            Predicate::AttributeEquals { name, value } => node.attribute(name) == Some(value.as_str()),
            Predicate::TextEquals(text) => node.text_equals(text),
        }
    }
}

/// A descriptive element selector: a tag filter plus predicates combined with OR.
///
/// Queries are evaluated structurally by [`crate::Document::query`]. The XPath produced by
/// the [`Display`] impl is for reporting only, with every literal escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tag: TagFilter,
    predicates: Vec<Predicate>,
}

impl Query {
    pub fn new(tag: TagFilter) -> Self {
        Self {
            tag,
            predicates: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::AttributeEquals {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.predicates.push(Predicate::TextEquals(text.into()));
        self
    }

    pub fn tag(&self) -> &TagFilter {
        &self.tag
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// A query without predicates matches nothing.
    pub fn matches(&self, node: &Node<'_>) -> bool {
        self.tag.matches(node) && self.predicates.iter().any(|predicate| predicate.matches(node))
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match &self.tag {
            TagFilter::Any => "*",
            TagFilter::Name(name) => name.as_str(),
        };

        if self.predicates.is_empty() {
            return write!(f, "//{}[false()]", tag);
        }

        let condition = self
            .predicates
            .iter()
            .map(|predicate| match predicate {
                Predicate::AttributeEquals { name, value } => {
                    format!("{}={}", attribute_step(name), xpath_literal(value))
                }
                Predicate::TextEquals(text) => format!(".={}", xpath_literal(text)),
            })
            .join(" or ");

        write!(f, "//{}[{}]", tag, condition)
    }
}

fn attribute_step(name: &str) -> String {
    if is_xml_name(name) {
        format!("@{}", name)
    } else {
        format!("@*[name()={}]", xpath_literal(name))
    }
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        }
        _ => false,
    }
}

/// Quotes `value` as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so a value holding both quote kinds is split into a
/// `concat(...)` of pieces that each avoid the quote they are wrapped in.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{}'", value)
    } else if !value.contains('"') {
        format!("\"{}\"", value)
    } else {
        let parts = value
            .split('\'')
            .map(|part| format!("'{}'", part))
            .join(", \"'\", ");
        format!("concat({})", parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "'plain'")]
    #[case("it's", "\"it's\"")]
    #[case("say \"hi\"", "'say \"hi\"'")]
    #[case("it's \"x\"", "concat('it', \"'\", 's \"x\"')")]
    #[case("", "''")]
    fn test_xpath_literal(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(xpath_literal(value), expected);
    }

    #[test]
    fn test_display() {
        let query = Query::new(TagFilter::Name("a".to_string()))
            .with_attribute("id", "btn")
            .with_attribute("class", "primary")
            .with_text("Click");
        assert_eq!(
            query.to_string(),
            "//a[@id='btn' or @class='primary' or .='Click']"
        );
    }

    #[test]
    fn test_display_escapes_quotes() {
        let query = Query::new(TagFilter::Name("a".to_string()))
            .with_attribute("onclick", "alert('ok')")
            .with_text("Don't");
        assert_eq!(
            query.to_string(),
            "//a[@onclick=\"alert('ok')\" or .=\"Don't\"]"
        );
    }

    #[rstest]
    #[case("data-id", "@data-id='1'")]
    #[case("xml:lang", "@xml:lang='1'")]
    #[case("@click", "@*[name()='@click']='1'")]
    #[case("1abc", "@*[name()='1abc']='1'")]
    fn test_display_attribute_names(#[case] name: &str, #[case] expected: &str) {
        let query = Query::new(TagFilter::Any).with_attribute(name, "1");
        assert_eq!(query.to_string(), format!("//*[{}]", expected));
    }

    #[test]
    fn test_display_without_predicates() {
        assert_eq!(Query::new(TagFilter::Any).to_string(), "//*[false()]");
    }
}
