//! Fuzzy action search
//!
//! Matches a free-text query against the catalog's distinct action labels
//! using a partial-ratio similarity: the query is scored against the
//! best-aligned substring of each candidate on a 0-100 scale, so a short
//! keyword still scores 100 against a long label containing it.

use rapidfuzz::fuzz;

/// Score a candidate must strictly exceed to count as a match
pub const SIMILARITY_THRESHOLD: f64 = 85.0;

/// Labels from `candidates` whose partial-ratio similarity to `query` is
/// strictly greater than `threshold`.
///
/// Comparison is case-insensitive; no other normalization is applied. An
/// empty query matches nothing. The result is sorted ascending for stable
/// presentation.
pub fn similar_actions<'a, I>(query: &str, candidates: I, threshold: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let mut matches: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| {
            let candidate_lower = candidate.to_lowercase();
            fuzz::partial_ratio(query_lower.chars(), candidate_lower.chars()) > threshold
        })
        .map(str::to_owned)
        .collect();
    matches.sort();
    matches
}
