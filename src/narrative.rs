use itertools::Itertools;
use std::collections::BTreeMap;

use crate::categories::{categorize, Category};
use crate::metrics::extract_metrics;
use crate::models::{Entry, QuarterMap};

/// Entries quoted in the technical and process paragraphs.
const LEAD_CLAUSES: usize = 3;
/// Entries quoted per half of the documentation/collaboration paragraph.
const SUPPORT_CLAUSES: usize = 2;

/// Entry text with the bullet marker stripped, cut at the first parenthesis.
/// Links and PR references live in the parenthetical tail.
fn leading_clause(text: &str) -> String {
    let stripped = text.trim_matches(|c: char| c == '-' || c == ' ');
    stripped
        .split('(')
        .next()
        .unwrap_or(stripped)
        .trim()
        .to_string()
}

fn clause_list(entries: &[&Entry], limit: usize) -> String {
    entries
        .iter()
        .take(limit)
        .map(|e| leading_clause(&e.text))
        .join(", ")
}

/// Compose one quarter's entries into prose paragraphs. Returns an empty
/// string for an empty quarter. Entries tagged only "other" surface solely
/// through the closing metrics paragraph.
pub fn generate_narrative(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut by_category: BTreeMap<Category, Vec<&Entry>> = BTreeMap::new();
    for entry in entries {
        for category in categorize(&entry.text) {
            by_category.entry(category).or_default().push(entry);
        }
    }

    let mut paragraphs: Vec<String> = Vec::new();

    if let Some(technical) = by_category.get(&Category::Technical) {
        let mut p = String::from("Technical achievements during this quarter focused on ");
        if technical.len() > 1 {
            p.push_str("multiple areas, including ");
        }
        p.push_str("improving system functionality and reliability. ");
        p.push_str("Key implementations included ");
        p.push_str(&clause_list(technical, LEAD_CLAUSES));
        p.push('.');
        paragraphs.push(p);
    }

    if let Some(process) = by_category.get(&Category::Process) {
        let mut p =
            String::from("Process improvements were made to enhance efficiency and reliability. ");
        p.push_str("Notable improvements included ");
        p.push_str(&clause_list(process, LEAD_CLAUSES));
        p.push('.');
        paragraphs.push(p);
    }

    let documentation = by_category.get(&Category::Documentation);
    let collaboration = by_category.get(&Category::Collaboration);
    if documentation.is_some() || collaboration.is_some() {
        let mut p = String::from(
            "Documentation and collaboration efforts strengthened the team's foundation. ",
        );
        if let Some(docs) = documentation {
            p.push_str("Documentation was enhanced through ");
            p.push_str(&clause_list(docs, SUPPORT_CLAUSES));
            p.push_str(". ");
        }
        if let Some(collab) = collaboration {
            p.push_str("Cross-team collaboration was demonstrated through ");
            p.push_str(&clause_list(collab, SUPPORT_CLAUSES));
            p.push('.');
        }
        paragraphs.push(p);
    }

    let all_metrics: Vec<String> = entries
        .iter()
        .flat_map(|e| extract_metrics(&e.text))
        .collect();
    if !all_metrics.is_empty() {
        paragraphs.push(format!(
            "Quantifiable improvements included {}.",
            all_metrics.iter().join(", ")
        ));
    }

    paragraphs.join("\n\n")
}

/// Full narrative document, newest quarter first: each block is a
/// `# Qn YYYY` heading followed by the quarter's paragraphs.
pub fn render_narratives(quarters: &QuarterMap) -> String {
    quarters
        .iter()
        .rev()
        .map(|(quarter, entries)| format!("# {}\n\n{}", quarter, generate_narrative(entries)))
        .join("\n\n")
}
