use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::dates::parse_entry_date;
use crate::dedup::SeenEntries;
use crate::impact::is_high_impact;
use crate::models::{Entry, QuarterKey, QuarterMap};

/// Date headers like "December 4, 2024:" open a section of bullet lines.
static DATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]+ \d{1,2},? \d{4}):").expect("date header pattern compiles")
});

struct Section<'a> {
    date_str: &'a str,
    body: &'a str,
}

/// Split the raw document at date headers. Text before the first header is
/// dropped; each section body runs to the next header or end of input.
fn split_sections(content: &str) -> Vec<Section<'_>> {
    let headers: Vec<(usize, usize, &str)> = DATE_HEADER
        .captures_iter(content)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            (whole.start(), whole.end(), caps.get(1).unwrap().as_str())
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start, date_str))| {
            let body_end = headers.get(i + 1).map_or(content.len(), |next| next.0);
            Section {
                date_str,
                body: &content[body_start..body_end],
            }
        })
        .collect()
}

/// Bucket admitted, deduplicated entries by quarter.
///
/// The seen-set is scoped to this call, so repeated invocations over the
/// same input yield the same buckets. Sections with unparseable dates and
/// rejected or duplicate lines are skipped, never surfaced as errors.
pub fn process_document(content: &str) -> QuarterMap {
    let mut quarters = QuarterMap::new();
    let mut seen = SeenEntries::new();
    let mut rejected = 0usize;
    let mut duplicates = 0usize;

    for section in split_sections(content) {
        let Some(date) = parse_entry_date(section.date_str) else {
            debug!("Skipping section - unparseable date '{}'", section.date_str);
            continue;
        };
        let quarter = QuarterKey::from_date(date);

        for line in section.body.lines() {
            let entry = line.trim();
            if !entry.starts_with('-') {
                continue;
            }
            if !is_high_impact(entry) {
                rejected += 1;
                continue;
            }
            if !seen.insert(entry) {
                duplicates += 1;
                continue;
            }
            quarters.entry(quarter).or_default().push(Entry {
                date,
                text: entry.to_string(),
            });
        }
    }

    debug!(
        "Aggregation - admitted={}, rejected={}, duplicates={}",
        seen.len(),
        rejected,
        duplicates
    );
    quarters
}
