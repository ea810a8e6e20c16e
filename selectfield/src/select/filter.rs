//! Local option filtering for dropdown widgets that filter client-side.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::item::{SelectOption, leaves};

/// A scored filter hit.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched leaf in the level-order flattening of the
    /// option tree.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy-filter the flattened leaf options against the typed input.
///
/// Returns matches sorted by score, highest first. An empty input returns
/// every leaf with score 0. Group headings are not matched; only leaves
/// can appear in the result.
pub fn filter_options(input: &str, options: &[SelectOption]) -> Vec<FilterMatch> {
    let flat = leaves(options);

    if input.is_empty() {
        return flat
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        input,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = flat
        .iter()
        .enumerate()
        .filter_map(|(index, leaf)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&leaf.label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
