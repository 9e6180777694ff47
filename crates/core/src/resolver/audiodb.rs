//! TheAudioDB API client.
//!
//! TheAudioDB keys its JSON endpoints by API key in the URL path; the
//! well-known public test key `1` is enough for artist searches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::types::{ResolveError, Resolver};

/// TheAudioDB's well-known public test API key, shared by the CLI surface.
pub const DEFAULT_API_KEY: &str = "1";

const DEFAULT_BASE_URL: &str = "http://www.theaudiodb.com/api/v1/json";

/// TheAudioDB client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDbConfig {
    /// API key, substituted into the search URL path.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Request timeout in seconds (default: 30), applied to both the
    /// search and the thumbnail request.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Base URL override (default: http://www.theaudiodb.com/api/v1/json).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for AudioDbConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
            base_url: None,
        }
    }
}

/// TheAudioDB-backed artwork resolver.
///
/// Holds the one HTTP client for the whole run; both the search and the
/// thumbnail download go through it.
pub struct AudioDbResolver {
    client: Client,
    search_url: String,
}

impl AudioDbResolver {
    /// Create a new resolver from configuration.
    pub fn new(config: AudioDbConfig) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .user_agent(user_agent())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResolveError::Http(e.to_string()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let search_url = format!(
            "{}/{}/search.php",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&config.api_key)
        );

        Ok(Self { client, search_url })
    }

    /// Runs the search request and applies the disambiguation policy,
    /// returning the single usable thumbnail URL.
    async fn search_thumbnail(&self, artist: &str) -> Result<String, ResolveError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("s", artist)])
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResolveError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let search: AdbSearchResponse = response.json().await.map_err(|e| {
            ResolveError::ParseError(format!("Failed to parse search response: {}", e))
        })?;

        select_thumbnail(artist, search)
    }

    /// Downloads the thumbnail, returning the raw body bytes. No content
    /// type or image validation is performed.
    async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::ApiError {
                status: status.as_u16(),
                message: format!("thumbnail fetch failed for {}", url),
            });
        }

        let bytes = response.bytes().await.map_err(classify_transport)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl Resolver for AudioDbResolver {
    fn name(&self) -> &str {
        "audiodb"
    }

    async fn resolve(&self, artist: &str) -> Result<Vec<u8>, ResolveError> {
        info!("Looking up '{}'", artist);
        let thumbnail_url = self.search_thumbnail(artist).await?;

        debug!("Fetching {}", thumbnail_url);
        self.fetch_thumbnail(&thumbnail_url).await
    }
}

/// Applies the disambiguation policy to a decoded search response.
///
/// Actionable means exactly one record with a non-empty thumbnail;
/// anything else short-circuits into a classified failure.
fn select_thumbnail(artist: &str, response: AdbSearchResponse) -> Result<String, ResolveError> {
    let mut records = response.artists.unwrap_or_default();
    match records.len() {
        0 => Err(ResolveError::NoMatch {
            artist: artist.to_string(),
        }),
        1 => {
            let record = records.remove(0);
            match record.thumbnail {
                Some(url) if !url.is_empty() => Ok(url),
                _ => Err(ResolveError::NoThumbnail {
                    artist: artist.to_string(),
                }),
            }
        }
        count => Err(ResolveError::AmbiguousMatch {
            artist: artist.to_string(),
            count,
        }),
    }
}

fn user_agent() -> String {
    format!(
        "Kodiak/{} ( https://github.com/lelloman/kodiak )",
        env!("CARGO_PKG_VERSION")
    )
}

fn classify_transport(e: reqwest::Error) -> ResolveError {
    if e.is_timeout() {
        ResolveError::Timeout
    } else if e.is_connect() {
        ResolveError::ConnectionFailed(e.to_string())
    } else {
        ResolveError::Http(e.to_string())
    }
}

// ============================================================================
// TheAudioDB API Response Types (private)
// ============================================================================

/// `artists` is `null` when the service has no records for the query, so
/// it decodes as an option rather than a bare list.
#[derive(Debug, Deserialize)]
struct AdbSearchResponse {
    #[serde(default)]
    artists: Option<Vec<AdbArtist>>,
}

#[derive(Debug, Deserialize)]
struct AdbArtist {
    #[serde(rename = "strArtistThumb", default)]
    thumbnail: Option<String>,
}
