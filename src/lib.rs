//! Quarterly hypedoc digest pipeline.
//!
//! Ingests a free-form, dated bullet log of achievements, admits the
//! significant entries, dedupes them, buckets them by calendar quarter, and
//! renders a dated summary plus a themed narrative report.

/// Section splitting and quarter bucketing.
pub mod aggregate;
/// Fixed taxonomy of achievement categories.
pub mod categories;
/// Accepted date formats and parsing.
pub mod dates;
/// Per-run entry deduplication.
pub mod dedup;
/// Impact scoring and the admission gate.
pub mod impact;
/// Quantitative metric extraction.
pub mod metrics;
/// Core entry and quarter types.
pub mod models;
/// Narrative prose generation.
pub mod narrative;
/// Single-run pipeline driver.
pub mod orchestrator;
/// Plain-text and markdown renderers.
pub mod render;

pub use models::{Entry, QuarterKey, QuarterMap};
