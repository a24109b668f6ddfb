use regex::Regex;
use std::sync::LazyLock;

/// Indicator patterns matched against the lower-cased entry text.
const IMPACT_INDICATORS: [&str; 12] = [
    r"\d+%",
    r"improv(ed|ing)",
    r"enhanc(ed|ing)",
    r"implement(ed|ing)",
    r"reduc(ed|ing)",
    r"optimiz(ed|ing)",
    r"led",
    r"launch(ed|ing)",
    r"migrat(ed|ing)",
    r"refactor(ed|ing)",
    r"coordinat(ed|ing)",
    r"architect(ed|ing)",
];

/// Indicator hits required when the entry carries no metric.
const MIN_INDICATORS: usize = 2;

static INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    IMPACT_INDICATORS
        .iter()
        .map(|p| Regex::new(p).expect("indicator pattern compiles"))
        .collect()
});

static METRIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:%|ms|minutes?|hours?)").expect("metric pattern compiles"));

/// Signals feeding the admission gate.
#[derive(Debug, Clone, Copy)]
pub struct ImpactSignals {
    pub score: usize,
    pub has_metrics: bool,
    pub has_link: bool,
}

pub fn impact_signals(entry: &str) -> ImpactSignals {
    let lower = entry.to_lowercase();
    ImpactSignals {
        score: INDICATORS.iter().filter(|re| re.is_match(&lower)).count(),
        has_metrics: METRIC.is_match(entry),
        has_link: entry.contains("github.com") || entry.contains("pull"),
    }
}

/// Admission gate: enough indicators or a concrete metric, and a tracked
/// link. No link means rejected regardless of score.
pub fn is_high_impact(entry: &str) -> bool {
    let signals = impact_signals(entry);
    (signals.score >= MIN_INDICATORS || signals.has_metrics) && signals.has_link
}
