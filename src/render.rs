use crate::models::QuarterMap;

const RULE_WIDTH: usize = 40;

/// Dated plain-text summary, newest quarter first, entries newest first
/// within each quarter. This is the cleaned format the markdown renderer
/// consumes.
pub fn render_quarterly_summary(quarters: &QuarterMap) -> String {
    let mut blocks: Vec<String> = Vec::new();
    for (quarter, entries) in quarters.iter().rev() {
        let mut out = String::new();
        out.push_str(&format!("{quarter} Summary:\n"));
        out.push_str(&"-".repeat(RULE_WIDTH));

        let mut sorted: Vec<_> = entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        for entry in sorted {
            out.push_str(&format!("\n{}:", entry.date.format("%B %d, %Y")));
            out.push_str(&format!("\n{}", entry.text));
        }
        blocks.push(out);
    }
    blocks.join("\n\n")
}

/// Re-emit the cleaned summary as Markdown: quarter headers become `#`,
/// date lines `##`, bullets stay verbatim, one blank line after each.
/// A pure formatting transform; rule lines and blanks are skipped.
pub fn render_markdown(cleaned: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for raw in cleaned.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("----") {
            continue;
        }
        if line.starts_with("- ") {
            out.push(line.to_string());
            out.push(String::new());
        } else if let Some(header) = line.strip_suffix(':') {
            if header.starts_with('Q') {
                out.push(format!("# {header}"));
            } else {
                out.push(format!("## {header}"));
            }
            out.push(String::new());
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, QuarterKey};
    use chrono::NaiveDate;

    fn sample_quarters() -> QuarterMap {
        let mut quarters = QuarterMap::new();
        quarters
            .entry(QuarterKey { year: 2024, quarter: 1 })
            .or_default()
            .extend([
                Entry {
                    date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                    text: "- Refactored the ingestion module (https://github.com/org/tools/pull/9)"
                        .to_string(),
                },
                Entry {
                    date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                    text: "- Improved build time by 20%, see https://github.com/org/tools/pull/5"
                        .to_string(),
                },
            ]);
        quarters
            .entry(QuarterKey { year: 2023, quarter: 3 })
            .or_default()
            .push(Entry {
                date: NaiveDate::from_ymd_opt(2023, 8, 20).unwrap(),
                text: "- Led and coordinated the data migration (https://github.com/org/tools/pull/2)"
                    .to_string(),
            });
        quarters
    }

    #[test]
    fn summary_lists_quarters_newest_first() {
        let summary = render_quarterly_summary(&sample_quarters());
        let q1 = summary.find("Q1 2024 Summary:").unwrap();
        let q3 = summary.find("Q3 2023 Summary:").unwrap();
        assert!(q1 < q3);
    }

    #[test]
    fn summary_sorts_entries_by_date_descending() {
        let summary = render_quarterly_summary(&sample_quarters());
        let feb = summary.find("February 10, 2024:").unwrap();
        let jan = summary.find("January 05, 2024:").unwrap();
        assert!(feb < jan);
    }

    #[test]
    fn summary_block_layout() {
        let mut quarters = QuarterMap::new();
        quarters
            .entry(QuarterKey { year: 2023, quarter: 3 })
            .or_default()
            .push(Entry {
                date: NaiveDate::from_ymd_opt(2023, 8, 20).unwrap(),
                text: "- Led the data migration (pull 2)".to_string(),
            });
        let summary = render_quarterly_summary(&quarters);
        assert_eq!(
            summary,
            format!(
                "Q3 2023 Summary:\n{}\nAugust 20, 2023:\n- Led the data migration (pull 2)",
                "-".repeat(40)
            )
        );
    }

    #[test]
    fn markdown_promotes_headers_and_keeps_bullets() {
        let cleaned = render_quarterly_summary(&sample_quarters());
        let markdown = render_markdown(&cleaned);

        assert!(markdown.contains("# Q1 2024 Summary\n"));
        assert!(markdown.contains("## February 10, 2024\n"));
        assert!(markdown.contains(
            "- Improved build time by 20%, see https://github.com/org/tools/pull/5\n"
        ));
        assert!(!markdown.contains("----"));
    }

    #[test]
    fn markdown_of_empty_summary_is_empty() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn empty_map_renders_empty_summary() {
        assert_eq!(render_quarterly_summary(&QuarterMap::new()), "");
    }
}
