//! Types for the scrape runner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collector::CollectorError;
use crate::resolver::ResolveError;

/// Errors that abort an entire run.
///
/// Per-candidate failures never surface here; they are logged and recorded
/// in the [`RunSummary`] instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Candidate collection failed. Nothing was looked up or written.
    #[error("collection failed: {0}")]
    Collector(#[from] CollectorError),
}

/// Why a candidate was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The search returned zero records for the artist name.
    NoMatch,
    /// The search returned more than one record.
    AmbiguousMatch,
    /// The single matching record carries no thumbnail URL.
    NoThumbnail,
    /// A request failed, timed out, or the response could not be decoded.
    NetworkError,
    /// The artwork file could not be written.
    WriteError,
}

impl From<&ResolveError> for SkipReason {
    fn from(err: &ResolveError) -> Self {
        match err {
            ResolveError::NoMatch { .. } => SkipReason::NoMatch,
            ResolveError::AmbiguousMatch { .. } => SkipReason::AmbiguousMatch,
            ResolveError::NoThumbnail { .. } => SkipReason::NoThumbnail,
            ResolveError::Timeout
            | ResolveError::ConnectionFailed(_)
            | ResolveError::ApiError { .. }
            | ResolveError::ParseError(_)
            | ResolveError::Http(_) => SkipReason::NetworkError,
        }
    }
}

/// State of one candidate during a run.
///
/// Candidates only move forward:
/// `Discovered -> Resolving -> Saved | Skipped`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CandidateState {
    /// Produced by the collector, not yet looked up.
    Discovered,

    /// Search and artwork download in flight.
    Resolving,

    /// Artwork fetched and written to the library.
    Saved,

    /// Nothing was written for this candidate this run.
    Skipped {
        /// Why the candidate was skipped.
        reason: SkipReason,
    },
}

impl CandidateState {
    /// Returns true if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, CandidateState::Saved | CandidateState::Skipped { .. })
    }

    /// Returns the state type as a string (for logging).
    pub fn state_type(&self) -> &'static str {
        match self {
            CandidateState::Discovered => "discovered",
            CandidateState::Resolving => "resolving",
            CandidateState::Saved => "saved",
            CandidateState::Skipped { .. } => "skipped",
        }
    }
}

/// Terminal state reached by one candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateOutcome {
    /// Artist name as found in the library.
    pub artist: String,
    /// Terminal state the candidate ended the run in.
    pub state: CandidateState,
}

/// Result of one completed run.
///
/// Holds the terminal state of every candidate in processing order; the
/// counters are derived. The caller decides what to do with it, typically
/// logging the totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Terminal state of each candidate, in processing order.
    pub outcomes: Vec<CandidateOutcome>,
}

impl RunSummary {
    /// Number of candidates the run processed.
    pub fn candidates(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of artwork files written.
    pub fn saved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == CandidateState::Saved)
            .count()
    }

    /// Number of candidates skipped, any reason.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.state, CandidateState::Skipped { .. }))
            .count()
    }

    /// Number of candidates skipped for the given reason.
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == CandidateState::Skipped { reason })
            .count()
    }
}
