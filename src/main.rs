use anyhow::Result;
use std::path::Path;
use tracing::info;

use hypedoc_digest::orchestrator::run_pipeline;

/// Fixed pipeline file locations, relative to the working directory.
const INPUT_FILE: &str = "original_hypedoc.txt";
const CLEANED_FILE: &str = "cleaned_entries.txt";
const NARRATIVE_FILE: &str = "quarterly_narratives.md";
const MARKDOWN_FILE: &str = "performance_review.md";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting hypedoc_digest");

    run_pipeline(
        Path::new(INPUT_FILE),
        Path::new(CLEANED_FILE),
        Path::new(NARRATIVE_FILE),
        Path::new(MARKDOWN_FILE),
    )
}
