use relocate_html::Node;

/// Similarity of `candidate` to `original`.
///
/// One point per attribute of `original` that `candidate` carries with exactly the same value,
/// plus one point when both inner markups are identical. The result never exceeds
/// `original.attribute_count() + 1`.
pub fn score(original: &Node<'_>, candidate: &Node<'_>) -> usize {
    let attribute_matches = original
        .attributes()
        .filter(|(name, value)| candidate.attribute(name) == Some(*value))
        .count();

    attribute_matches + usize::from(candidate.markup_equals(original))
}
