//! Scrape runner that wires the pipeline together.
//!
//! One run walks every candidate through a small forward-only state machine:
//! - **Discovered**: produced by the collector
//! - **Resolving**: search and artwork download in flight
//! - **Saved** / **Skipped**: terminal, recorded in the run summary
//!
//! Candidates are processed sequentially. Per-candidate failures are logged
//! and counted; only candidate collection can fail the whole run.

mod runner;
mod types;

pub use runner::Scraper;
pub use types::{CandidateOutcome, CandidateState, RunSummary, ScrapeError, SkipReason};
