use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Metric capture patterns, applied in order. Group 1 is the reported
/// substring; the duration pattern deliberately captures the number alone.
const METRIC_PATTERNS: [&str; 5] = [
    r"(\d+(?:\.\d+)?%)",
    r"(\d+(?:\.\d+)?)\s*(?:ms|minutes?|hours?)",
    r"reduced.*?by\s+(\d+(?:\.\d+)?%)",
    r"improved.*?by\s+(\d+(?:\.\d+)?%)",
    r"increased.*?by\s+(\d+(?:\.\d+)?%)",
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    METRIC_PATTERNS
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("metric pattern compiles")
        })
        .collect()
});

/// Pull every quantitative capture out of an entry, in pattern order.
/// A value matched by both a bare pattern and a phrase-anchored pattern is
/// reported twice; duplicates are not collapsed.
pub fn extract_metrics(entry: &str) -> Vec<String> {
    let mut metrics = Vec::new();
    for re in COMPILED.iter() {
        for caps in re.captures_iter(entry) {
            if let Some(m) = caps.get(1) {
                metrics.push(m.as_str().to_string());
            }
        }
    }
    metrics
}
