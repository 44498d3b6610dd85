use crate::query_builder::{CandidateTag, build_candidate_query};
use crate::scorer::score;
use crate::ResolveError;
use relocate_html::Document;
use serde::Serialize;

/// Identifier looked up when none is configured.
pub const DEFAULT_TARGET_ID: &str = "make-everything-ok-button";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub target_id: String,
    pub candidate_tag: CandidateTag,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_string(),
            candidate_tag: CandidateTag::default(),
        }
    }
}

impl ResolveOptions {
    pub fn with_target_id(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            ..Default::default()
        }
    }
}

/// How the resolved element was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// The target document has an element with the same ID.
    Identity,
    /// The fallback query returned exactly one element; nothing was scored.
    SingleCandidate,
    /// Best of several fallback candidates.
    Similarity { score: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub xpath: String,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub xpath: String,
    pub strategy: Strategy,
    /// Rendered fallback query, absent for identity matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Every scored candidate in document order. Empty unless scoring took place.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<ScoredCandidate>,
}

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn resolve(&self, original: &Document, target: &Document) -> Result<Resolution, ResolveError> {
        let id = self.options.target_id.as_str();
        tracing::debug!("Searching for element with ID `{}`", id);

        let original_node =
            original
                .find_by_id(id)
                .ok_or_else(|| ResolveError::OriginalElementNotFound {
                    id: id.to_string(),
                })?;

        if let Some(node) = target.find_by_id(id) {
            let xpath = node.xpath();
            tracing::info!("Resolved `{}` by ID: {}", id, xpath);
            return Ok(Resolution {
                xpath,
                strategy: Strategy::Identity,
                query: None,
                candidates: Vec::new(),
            });
        }

        let query = build_candidate_query(&original_node, self.options.candidate_tag);
        let rendered = query.to_string();
        tracing::debug!("ID `{}` missing from target, querying {}", id, rendered);

        let candidates = target.query(&query);
        match candidates.as_slice() {
            [] => {
                return Err(ResolveError::NoMatchFound {
                    id: id.to_string(),
                    query: rendered,
                });
            }
            [only] => {
                let xpath = only.xpath();
                tracing::info!("Resolved `{}` by its only candidate: {}", id, xpath);
                return Ok(Resolution {
                    xpath,
                    strategy: Strategy::SingleCandidate,
                    query: Some(rendered),
                    candidates: Vec::new(),
                });
            }
            _ => {}
        }

        let scored = candidates
            .iter()
            .map(|candidate| {
                let candidate = ScoredCandidate {
                    xpath: candidate.xpath(),
                    score: score(&original_node, candidate),
                };
                tracing::debug!("Candidate {} scored {}", candidate.xpath, candidate.score);
                candidate
            })
            .collect::<Vec<_>>();

        let Some(best) = best_candidate(&scored) else {
            return Err(ResolveError::NoMatchFound {
                id: id.to_string(),
                query: rendered,
            });
        };
        let (xpath, best_score) = (best.xpath.clone(), best.score);
        tracing::info!(
            "Resolved `{}` by similarity among {} candidates: {} (score {})",
            id,
            scored.len(),
            xpath,
            best_score
        );

        Ok(Resolution {
            xpath,
            strategy: Strategy::Similarity { score: best_score },
            query: Some(rendered),
            candidates: scored,
        })
    }
}

/// First candidate in document order holding the maximum score.
///
/// A later candidate only replaces the current best with a strictly greater score, so ties
/// always go to the earlier element.
fn best_candidate(scored: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    let mut best: Option<&ScoredCandidate> = None;
    for candidate in scored {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Resolves `target_id` with the default options and returns only the XPath.
pub fn resolve(original: &Document, target: &Document, target_id: &str) -> Result<String, ResolveError> {
    Resolver::new(ResolveOptions::with_target_id(target_id))
        .resolve(original, target)
        .map(|resolution| resolution.xpath)
}
