use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::aggregate::process_document;
use crate::narrative::render_narratives;
use crate::render::{render_markdown, render_quarterly_summary};

/// One full processing run: read the raw hypedoc, bucket admitted entries
/// by quarter, and write the cleaned summary, the narrative report, and the
/// markdown rendering of the summary.
pub fn run_pipeline(
    input_path: &Path,
    cleaned_path: &Path,
    narrative_path: &Path,
    markdown_path: &Path,
) -> Result<()> {
    let pipeline_start = Instant::now();
    info!("Pipeline started - input={}", input_path.display());

    // 1) read the raw hypedoc
    let content = std::fs::read_to_string(input_path)
        .with_context(|| format!("Reading {}", input_path.display()))?;
    debug!("Input read - bytes={}", content.len());

    // 2) classify, dedupe, and bucket by quarter
    let aggregate_start = Instant::now();
    let quarters = process_document(&content);
    let total_entries: usize = quarters.values().map(Vec::len).sum();
    info!(
        "Aggregation completed - duration={:.2}s, quarters={}, entries={}",
        aggregate_start.elapsed().as_secs_f32(),
        quarters.len(),
        total_entries
    );

    // 3) dated quarterly summary (cleaned format)
    let cleaned = render_quarterly_summary(&quarters);
    std::fs::write(cleaned_path, cleaned.as_bytes())
        .with_context(|| format!("Writing {}", cleaned_path.display()))?;
    debug!("Wrote {}", cleaned_path.display());

    // 4) narrative report per quarter
    let narratives = render_narratives(&quarters);
    std::fs::write(narrative_path, narratives.as_bytes())
        .with_context(|| format!("Writing {}", narrative_path.display()))?;
    debug!("Wrote {}", narrative_path.display());

    // 5) markdown rendering of the cleaned summary
    let markdown = render_markdown(&cleaned);
    std::fs::write(markdown_path, markdown.as_bytes())
        .with_context(|| format!("Writing {}", markdown_path.display()))?;
    debug!("Wrote {}", markdown_path.display());

    info!(
        "Pipeline completed successfully - total_duration={:.2}s, quarters={}, entries={}",
        pipeline_start.elapsed().as_secs_f32(),
        quarters.len(),
        total_entries
    );
    Ok(())
}
