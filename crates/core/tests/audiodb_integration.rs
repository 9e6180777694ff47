//! Integration tests against a fake TheAudioDB service.
//!
//! These tests run the real pipeline (filesystem collector, HTTP resolver,
//! filesystem writer) against an in-process axum server that plays the role
//! of TheAudioDB, covering the search policy and artwork download end to end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tempfile::TempDir;

use kodiak_core::testing::fixtures;
use kodiak_core::{
    AudioDbConfig, AudioDbResolver, FsCollector, FsWriter, LibraryConfig, Scraper, SkipReason,
};

/// In-process stand-in for TheAudioDB.
///
/// Serves scripted search bodies per artist name and artwork bytes from
/// `/images/{name}`, and records what was requested.
struct FakeAudioDb {
    /// Search bodies keyed by artist name, returned verbatim.
    responses: HashMap<String, String>,
    /// Artwork bytes served from the image route.
    image: Vec<u8>,
    /// Status returned by the search route.
    search_status: StatusCode,
    search_hits: AtomicUsize,
    image_hits: AtomicUsize,
    last_api_key: Mutex<Option<String>>,
}

impl FakeAudioDb {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            image: fixtures::jpeg_bytes(),
            search_status: StatusCode::OK,
            search_hits: AtomicUsize::new(0),
            image_hits: AtomicUsize::new(0),
            last_api_key: Mutex::new(None),
        }
    }

    fn with_response(mut self, artist: &str, body: String) -> Self {
        self.responses.insert(artist.to_string(), body);
        self
    }

    fn with_search_status(mut self, status: StatusCode) -> Self {
        self.search_status = status;
        self
    }

    fn search_hits(&self) -> usize {
        self.search_hits.load(Ordering::SeqCst)
    }

    fn image_hits(&self) -> usize {
        self.image_hits.load(Ordering::SeqCst)
    }

    fn last_api_key(&self) -> Option<String> {
        self.last_api_key.lock().unwrap().clone()
    }
}

async fn search_handler(
    State(state): State<Arc<FakeAudioDb>>,
    Path(key): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state.search_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_api_key.lock().unwrap() = Some(key);

    if state.search_status != StatusCode::OK {
        return (state.search_status, "upstream broken".to_string());
    }

    let artist = params.get("s").cloned().unwrap_or_default();
    match state.responses.get(&artist) {
        Some(body) => (StatusCode::OK, body.clone()),
        None => (StatusCode::OK, fixtures::search_json(&[])),
    }
}

async fn image_handler(State(state): State<Arc<FakeAudioDb>>) -> Vec<u8> {
    state.image_hits.fetch_add(1, Ordering::SeqCst);
    state.image.clone()
}

/// Bind an ephemeral port, then build the fake with its own base URL so
/// scripted search bodies can point thumbnails back at it.
async fn spawn_fake_audiodb(
    build: impl FnOnce(&str) -> FakeAudioDb,
) -> (String, Arc<FakeAudioDb>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let base_url = format!("http://{}", listener.local_addr().expect("Failed to read addr"));

    let state = Arc::new(build(&base_url));
    let app = Router::new()
        .route("/{key}/search.php", get(search_handler))
        .route("/images/{name}", get(image_handler))
        .with_state(Arc::clone(&state));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    (base_url, state)
}

fn library_with_artists(artists: &[&str]) -> (TempDir, LibraryConfig) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for artist in artists {
        std::fs::create_dir(temp_dir.path().join(artist)).expect("Failed to create artist dir");
    }
    let library = LibraryConfig::new(temp_dir.path());
    (temp_dir, library)
}

fn scraper_for(
    library: &LibraryConfig,
    base_url: &str,
    api_key: &str,
) -> Scraper<FsCollector, AudioDbResolver, FsWriter> {
    let config = AudioDbConfig {
        api_key: api_key.to_string(),
        base_url: Some(base_url.to_string()),
        ..AudioDbConfig::default()
    };
    let resolver = AudioDbResolver::new(config).expect("Failed to create resolver");
    Scraper::new(
        FsCollector::new(library.clone()),
        resolver,
        FsWriter::new(library.clone()),
    )
}

#[tokio::test]
async fn test_run_saves_artwork_end_to_end() {
    let (temp_dir, library) = library_with_artists(&["Morphine", "Covered"]);
    std::fs::write(temp_dir.path().join("Covered/artist.jpg"), b"existing").unwrap();

    let (base_url, fake) = spawn_fake_audiodb(|base| {
        let thumb = format!("{}/images/morphine.jpg", base);
        FakeAudioDb::new()
            .with_response("Morphine", fixtures::search_json(&[Some(thumb.as_str())]))
    })
    .await;

    let summary = scraper_for(&library, &base_url, "1")
        .run()
        .await
        .expect("Run failed");

    // Only the uncovered artist was a candidate.
    assert_eq!(summary.candidates(), 1);
    assert_eq!(summary.saved(), 1);
    assert_eq!(fake.search_hits(), 1);
    assert_eq!(fake.image_hits(), 1);

    let written = std::fs::read(temp_dir.path().join("Morphine/artist.jpg")).unwrap();
    assert_eq!(written, fixtures::jpeg_bytes());

    // Existing artwork is left alone.
    let untouched = std::fs::read(temp_dir.path().join("Covered/artist.jpg")).unwrap();
    assert_eq!(untouched, b"existing");
}

#[tokio::test]
async fn test_search_policy_skips_without_downloading() {
    let (temp_dir, library) =
        library_with_artists(&["Nobody", "Common Name", "Obscure", "Empty Thumb"]);

    let (base_url, fake) = spawn_fake_audiodb(|base| {
        let thumb = format!("{}/images/a.jpg", base);
        FakeAudioDb::new()
            // "Nobody" gets the default {"artists": null} body.
            .with_response(
                "Common Name",
                fixtures::search_json(&[Some(thumb.as_str()), Some(thumb.as_str())]),
            )
            .with_response("Obscure", fixtures::search_json(&[None]))
            .with_response("Empty Thumb", fixtures::search_json(&[Some("")]))
    })
    .await;

    let summary = scraper_for(&library, &base_url, "1")
        .run()
        .await
        .expect("Run failed");

    assert_eq!(summary.candidates(), 4);
    assert_eq!(summary.saved(), 0);
    assert_eq!(summary.skipped_for(SkipReason::NoMatch), 1);
    assert_eq!(summary.skipped_for(SkipReason::AmbiguousMatch), 1);
    assert_eq!(summary.skipped_for(SkipReason::NoThumbnail), 2);

    // Every artist was searched, nothing was downloaded.
    assert_eq!(fake.search_hits(), 4);
    assert_eq!(fake.image_hits(), 0);
    for artist in ["Nobody", "Common Name", "Obscure", "Empty Thumb"] {
        assert!(!temp_dir.path().join(artist).join("artist.jpg").exists());
    }
}

#[tokio::test]
async fn test_api_key_is_part_of_the_search_path() {
    let (_temp_dir, library) = library_with_artists(&["Anyone"]);
    let (base_url, fake) = spawn_fake_audiodb(|_| FakeAudioDb::new()).await;

    scraper_for(&library, &base_url, "testkey")
        .run()
        .await
        .expect("Run failed");

    assert_eq!(fake.last_api_key(), Some("testkey".to_string()));
}

#[tokio::test]
async fn test_server_error_skips_candidate() {
    let (_temp_dir, library) = library_with_artists(&["Anyone"]);
    let (base_url, fake) = spawn_fake_audiodb(|_| {
        FakeAudioDb::new().with_search_status(StatusCode::INTERNAL_SERVER_ERROR)
    })
    .await;

    let summary = scraper_for(&library, &base_url, "1")
        .run()
        .await
        .expect("Run failed");

    assert_eq!(summary.skipped_for(SkipReason::NetworkError), 1);
    assert_eq!(fake.image_hits(), 0);
}

#[tokio::test]
async fn test_malformed_response_skips_candidate() {
    let (_temp_dir, library) = library_with_artists(&["Garbled"]);
    let (base_url, fake) = spawn_fake_audiodb(|_| {
        FakeAudioDb::new().with_response("Garbled", "not json at all".to_string())
    })
    .await;

    let summary = scraper_for(&library, &base_url, "1")
        .run()
        .await
        .expect("Run failed");

    assert_eq!(summary.skipped_for(SkipReason::NetworkError), 1);
    assert_eq!(fake.image_hits(), 0);
}

#[tokio::test]
async fn test_unreachable_service_skips_all_candidates() {
    let (_temp_dir, library) = library_with_artists(&["First", "Second"]);

    // Grab a port nobody is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let summary = scraper_for(&library, &format!("http://127.0.0.1:{}", port), "1")
        .run()
        .await
        .expect("Run failed");

    // Transport failures are per-candidate, the run itself completes.
    assert_eq!(summary.candidates(), 2);
    assert_eq!(summary.skipped_for(SkipReason::NetworkError), 2);
}

#[tokio::test]
async fn test_second_run_skips_saved_artists() {
    let (_temp_dir, library) = library_with_artists(&["Morphine"]);
    let (base_url, fake) = spawn_fake_audiodb(|base| {
        let thumb = format!("{}/images/morphine.jpg", base);
        FakeAudioDb::new()
            .with_response("Morphine", fixtures::search_json(&[Some(thumb.as_str())]))
    })
    .await;

    let scraper = scraper_for(&library, &base_url, "1");

    let first = scraper.run().await.expect("First run failed");
    assert_eq!(first.saved(), 1);

    let second = scraper.run().await.expect("Second run failed");
    assert_eq!(second.candidates(), 0);

    // The saved artist was not looked up again.
    assert_eq!(fake.search_hits(), 1);
}
