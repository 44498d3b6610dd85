#![no_main]

use arbitrary::Arbitrary;
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use relocate_core::{CandidateTag, ResolveOptions, Resolver, build_candidate_query, score};
use relocate_html::Document;

const ID: &str = "fuzz-target";

#[derive(Debug, Clone, Arbitrary)]
struct ArbitraryElement {
    tag: bool,
    attributes: Vec<(String, String)>,
    text: String,
    nested: bool,
}

impl ArbitraryElement {
    fn to_html(&self, id: Option<&str>) -> String {
        let tag = if self.tag { "a" } else { "span" };
        let attributes = id
            .map(|id| format!(" id=\"{}\"", id))
            .into_iter()
            .chain(self.attributes.iter().filter_map(|(name, value)| {
                let name = attribute_name(name)?;
                Some(format!(" {}=\"{}\"", name, escape(value, true)))
            }))
            .join("");
        let text = escape(&self.text, false);
        let inner = if self.nested { format!("<b>{}</b>", text) } else { text };
        format!("<{tag}{attributes}>{inner}</{tag}>")
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct Context {
    original: ArbitraryElement,
    targets: Vec<ArbitraryElement>,
    keep_id: Option<u8>,
    original_tag: bool,
    raw: Option<(String, String)>,
}

fn attribute_name(name: &str) -> Option<String> {
    let name = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase();
    (name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) && name != "id").then_some(name)
}

fn escape(value: &str, attribute: bool) -> String {
    let value = value.replace('&', "&amp;").replace('<', "&lt;");
    if attribute { value.replace('"', "&quot;") } else { value }
}

fuzz_target!(|context: Context| {
    let (original_html, target_html) = match &context.raw {
        Some((original, target)) => (original.clone(), target.clone()),
        None => {
            let keep = context
                .keep_id
                .map(|index| index as usize % (context.targets.len() + 1));
            let targets = context
                .targets
                .iter()
                .enumerate()
                .map(|(index, element)| element.to_html((keep == Some(index)).then_some(ID)))
                .join("");
            (
                format!("<body>{}</body>", context.original.to_html(Some(ID))),
                format!("<body>{}</body>", targets),
            )
        }
    };

    let (Ok(original), Ok(target)) = (Document::parse(&original_html), Document::parse(&target_html)) else {
        return;
    };

    let candidate_tag = if context.original_tag {
        CandidateTag::Original
    } else {
        CandidateTag::Anchor
    };
    let resolver = Resolver::new(ResolveOptions {
        target_id: ID.to_string(),
        candidate_tag,
    });
    let result = resolver.resolve(&original, &target);

    let Some(original_node) = original.find_by_id(ID) else {
        assert!(result.is_err());
        return;
    };

    let query = build_candidate_query(&original_node, candidate_tag);
    assert!(!query.to_string().is_empty());

    for candidate in target.query(&query) {
        assert!(score(&original_node, &candidate) <= original_node.attribute_count() + 1);
    }

    if let Ok(resolution) = result {
        assert!(target.elements().any(|node| node.xpath() == resolution.xpath));
    }
});
