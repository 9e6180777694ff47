pub mod collector;
pub mod config;
pub mod resolver;
pub mod scraper;
pub mod testing;
pub mod writer;

pub use collector::{Collector, CollectorError, FsCollector};
pub use config::{
    validate_config, Config, ConfigError, LibraryConfig, DEFAULT_ARTWORK_FILE,
};
pub use resolver::{AudioDbConfig, AudioDbResolver, ResolveError, Resolver, DEFAULT_API_KEY};
pub use scraper::{
    CandidateOutcome, CandidateState, RunSummary, ScrapeError, Scraper, SkipReason,
};
pub use writer::{FsWriter, WriteError, Writer};
