use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kodiak_core::{
    validate_config, AudioDbConfig, AudioDbResolver, Config, FsCollector, FsWriter, LibraryConfig,
    Scraper, DEFAULT_API_KEY, DEFAULT_ARTWORK_FILE,
};

/// Fetch missing artist artwork for a Kodi music library.
///
/// Scans the top level of the library for artist directories that have no
/// artwork file yet, looks each artist up on TheAudioDB, and saves the
/// artist thumbnail next to their music.
#[derive(Parser, Debug)]
#[clap(name = "kodiak", version)]
struct CliArgs {
    /// Music library root; its immediate subdirectories are treated as artists.
    pub library_root: PathBuf,

    /// TheAudioDB API key.
    #[clap(short = 'k', long, default_value = DEFAULT_API_KEY)]
    pub api_key: String,

    /// Artwork file name expected in each artist directory.
    #[clap(short = 'f', long, default_value = DEFAULT_ARTWORK_FILE)]
    pub artwork_file: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Map repeated -v flags to a default log level. Warnings and errors are
/// always shown.
fn verbosity_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(verbosity_filter(cli_args.verbose).into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = run(cli_args).await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli_args: CliArgs) -> Result<()> {
    let config = Config {
        library: LibraryConfig {
            root: cli_args.library_root,
            artwork_file: cli_args.artwork_file,
        },
        audiodb: AudioDbConfig {
            api_key: cli_args.api_key,
            ..AudioDbConfig::default()
        },
    };
    validate_config(&config)?;

    let collector = FsCollector::new(config.library.clone());
    let resolver =
        AudioDbResolver::new(config.audiodb).context("Failed to create TheAudioDB client")?;
    let writer = FsWriter::new(config.library);

    let summary = Scraper::new(collector, resolver, writer).run().await?;

    info!(
        "Done: {} candidates, {} saved, {} skipped",
        summary.candidates(),
        summary.saved(),
        summary.skipped()
    );
    Ok(())
}
