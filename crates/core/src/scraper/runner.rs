//! Scrape runner implementation.

use tracing::{debug, error, warn};

use crate::collector::Collector;
use crate::resolver::Resolver;
use crate::writer::Writer;

use super::types::{CandidateOutcome, CandidateState, RunSummary, ScrapeError, SkipReason};

/// Drives candidates through the scrape state machine.
///
/// One run: collect candidates, then advance each candidate to a terminal
/// state, one at a time and in collection order. A failing candidate never
/// affects the rest of the run; only collection failures abort.
pub struct Scraper<C, R, W>
where
    C: Collector,
    R: Resolver,
    W: Writer,
{
    collector: C,
    resolver: R,
    writer: W,
}

impl<C, R, W> Scraper<C, R, W>
where
    C: Collector,
    R: Resolver,
    W: Writer,
{
    /// Create a new scraper from the three pipeline roles.
    pub fn new(collector: C, resolver: R, writer: W) -> Self {
        Self {
            collector,
            resolver,
            writer,
        }
    }

    /// Runs the pipeline over every candidate once.
    pub async fn run(&self) -> Result<RunSummary, ScrapeError> {
        let candidates = self.collector.collect().await?;
        debug!("Scraping {} candidates", candidates.len());

        let mut summary = RunSummary::default();
        for artist in candidates {
            let mut state = CandidateState::Discovered;
            while !state.is_terminal() {
                state = self.step(&artist, state).await;
            }
            debug!("'{}' finished as {}", artist, state.state_type());
            summary.outcomes.push(CandidateOutcome { artist, state });
        }

        Ok(summary)
    }

    /// Advances a candidate one step. Terminal states are returned unchanged.
    async fn step(&self, artist: &str, state: CandidateState) -> CandidateState {
        match state {
            CandidateState::Discovered => CandidateState::Resolving,
            CandidateState::Resolving => self.resolve_and_save(artist).await,
            terminal => terminal,
        }
    }

    /// Looks up artwork for one candidate and persists it.
    ///
    /// All failures end the candidate in `Skipped`; expected lookup outcomes
    /// log at warn, everything else at error.
    async fn resolve_and_save(&self, artist: &str) -> CandidateState {
        let artwork = match self.resolver.resolve(artist).await {
            Ok(artwork) => artwork,
            Err(e) => {
                if e.is_semantic() {
                    // Semantic failures already name the artist.
                    warn!("{}: skipping.", e);
                } else {
                    error!("'{}': {}: skipping.", artist, e);
                }
                return CandidateState::Skipped {
                    reason: SkipReason::from(&e),
                };
            }
        };

        match self.writer.write(artist, &artwork).await {
            Ok(()) => CandidateState::Saved,
            Err(e) => {
                error!("{}: skipping.", e);
                CandidateState::Skipped {
                    reason: SkipReason::WriteError,
                }
            }
        }
    }
}
