//! Integration tests for cathub
//!
//! These tests drive the public API end to end: a session loading from a
//! fixture source, the HTTP client against a local stub server, and the
//! configuration and preference files in temporary directories.

use async_trait::async_trait;
use cathub::{
    catalog::{Category, RawCatalogItem},
    config::HubConfig,
    dispatch::{LinkKind, LinkOpener},
    fetch::{self, CatalogSource, FetchError, HttpCatalogClient},
    filter::TagMatchMode,
    locale::Locale,
    nav::Page,
    prefs::Preferences,
    session::{HubSession, LoadState, ViewMode},
};
use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread;
use tempfile::TempDir;

fn record(id: &str, name: &str, tags: &str, tags_en: Option<&str>) -> RawCatalogItem {
    RawCatalogItem {
        id: id.to_string(),
        name: Some(name.to_string()),
        tags: Some(tags.to_string()),
        tags_en: tags_en.map(str::to_string),
        url: Some(format!("https://example.com/{id}.zip")),
        rel_link: Some("#".to_string()),
        ..RawCatalogItem::default()
    }
}

/// Source serving fixed records and counting requests per category
#[derive(Default)]
struct FixtureSource {
    plugins: Vec<RawCatalogItem>,
    scripts: Vec<RawCatalogItem>,
    failing: Vec<Category>,
    requests: Mutex<Vec<Category>>,
}

impl FixtureSource {
    fn catalog() -> Self {
        Self {
            plugins: vec![
                record("p1", "Reverb", "音声,効果", Some("audio,effect")),
                record("p2", "Blur", "映像,効果", None),
                record("p3", "Meter", "音声", Some("audio")),
            ],
            scripts: vec![record("s1", "Shake", "映像", Some("video"))],
            ..Self::default()
        }
    }

    fn requests(&self) -> Vec<Category> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CatalogSource for FixtureSource {
    async fn fetch_category(&self, category: Category) -> Result<Vec<RawCatalogItem>, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(category);
        }
        if self.failing.contains(&category) {
            return Err(FetchError::Status {
                category,
                status: 500,
                message: format!("{category} unavailable"),
            });
        }
        Ok(match category {
            Category::Plugins => self.plugins.clone(),
            Category::Scripts => self.scripts.clone(),
        })
    }
}

#[derive(Default)]
struct Recorder {
    opened: RefCell<Vec<String>>,
}

impl LinkOpener for Recorder {
    fn open(&self, url: &str) -> Result<(), String> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_browse_workflow_over_fixture_catalog() {
    let source = FixtureSource::catalog();
    let mut session = HubSession::new(Locale::Ja, TagMatchMode::Any, ViewMode::Grid);

    session.reload(&source).await;
    assert!(session.load_state().is_ready());
    assert_eq!(session.visible_ids(), vec!["p1", "p2", "p3"]);
    assert_eq!(session.display_tags(), ["効果", "映像", "音声"]);

    session.toggle_tag("音声");
    session.toggle_tag("効果");
    assert_eq!(session.visible_ids(), vec!["p1", "p2", "p3"]);
    session.set_tag_mode(TagMatchMode::All);
    assert_eq!(session.visible_ids(), vec!["p1"]);

    session.set_search("REV");
    session.select_all_visible();
    assert_eq!(session.selection().count(), 1);

    let recorder = Recorder::default();
    let outcome = session.batch_open(LinkKind::Download, &recorder);
    assert_eq!(outcome.opened, 1);
    assert_eq!(*recorder.opened.borrow(), vec!["https://example.com/p1.zip"]);
    assert!(session.selection().is_empty());

    // Switching pages prunes tags the scripts page does not display
    session.set_search("");
    assert!(session.navigate(Page::Scripts));
    assert!(session.filter().selected_tags.is_empty());
    assert_eq!(session.visible_ids(), vec!["s1"]);
}

#[tokio::test]
async fn test_english_locale_falls_back_per_item() {
    let source = FixtureSource::catalog();
    let mut session = HubSession::new(Locale::Ja, TagMatchMode::Any, ViewMode::List);
    session.reload(&source).await;

    assert!(session.switch_locale(Locale::En));
    // p2 has no English tags and keeps its default ones
    assert_eq!(session.display_tags(), ["audio", "effect", "効果", "映像"]);

    session.toggle_tag("audio");
    assert_eq!(session.visible_ids(), vec!["p1", "p3"]);
}

#[tokio::test]
async fn test_detail_links_with_placeholders_open_nothing() {
    let source = FixtureSource::catalog();
    let mut session = HubSession::default();
    session.reload(&source).await;
    session.select_all_visible();

    let recorder = Recorder::default();
    let outcome = session.batch_open(LinkKind::Detail, &recorder);
    assert!(outcome.no_links_available());
    assert!(recorder.opened.borrow().is_empty());
}

#[tokio::test]
async fn test_failed_load_then_retry() {
    let failing = FixtureSource {
        failing: vec![Category::Plugins, Category::Scripts],
        ..FixtureSource::catalog()
    };
    let mut session = HubSession::default();
    session.reload(&failing).await;

    let LoadState::Failed(error) = session.load_state() else {
        panic!("expected a failed load, got {:?}", session.load_state());
    };
    assert!(error.to_string().contains("unavailable"));
    assert!(session.visible_items().is_empty());
    assert!(session.store().is_empty());

    let healthy = FixtureSource::catalog();
    session.reload(&healthy).await;
    assert!(session.load_state().is_ready());
    assert_eq!(session.store().len(), 4);

    let mut requested = healthy.requests();
    requested.sort_by_key(|c| c.endpoint());
    assert_eq!(requested, vec![Category::Plugins, Category::Scripts]);
}

#[tokio::test]
async fn test_one_failing_category_fails_the_whole_load() {
    let source = FixtureSource {
        failing: vec![Category::Scripts],
        ..FixtureSource::catalog()
    };
    let result = fetch::load_catalog(&source).await;
    assert!(matches!(
        result,
        Err(FetchError::Status {
            category: Category::Scripts,
            ..
        })
    ));
}

/// Answer `connections` requests on a local port with a fixed response
///
/// Returns the base URL and a handle yielding the raw request heads.
fn stub_server(status: &'static str, body: &'static str, connections: usize) -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let mut heads = Vec::new();
        for stream in listener.incoming().take(connections) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            heads.push(head);
        }
        heads
    });

    (base_url, handle)
}

fn configured(base_url: String) -> HubConfig {
    HubConfig {
        base_url: Some(base_url),
        api_key: Some("secret-key".to_string()),
        page_limit: 25,
        ..HubConfig::default()
    }
}

#[test]
fn test_http_client_sends_key_and_limit() {
    let body = r#"{"contents":[{"id":"x1","name":"Glow","tags":"a, b,,c","url":"https://example.com/x1.zip"}],"totalCount":1}"#;
    let (base_url, server) = stub_server("200 OK", body, 2);

    let client = HttpCatalogClient::new(configured(base_url).endpoint().unwrap()).unwrap();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let store = runtime.block_on(fetch::load_catalog(&client)).unwrap();

    let heads = server.join().unwrap();
    assert_eq!(heads.len(), 2);
    for head in &heads {
        let lower = head.to_lowercase();
        assert!(lower.contains("x-microcms-api-key: secret-key"));
        assert!(lower.contains("limit=25"));
    }
    assert!(heads.iter().any(|h| h.starts_with("GET /api/v1/plugins")));
    assert!(heads.iter().any(|h| h.starts_with("GET /api/v1/scripts")));

    let item = &store.items(Category::Plugins)[0];
    assert_eq!(item.tags, vec!["a", "b", "c"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_http_error_message_is_passed_through() {
    // The second request may be cancelled once the first fails, so the
    // server thread is not joined
    let (base_url, _server) = stub_server("401 Unauthorized", r#"{"message":"X-MICROCMS-API-KEY header is invalid."}"#, 2);

    let client = HttpCatalogClient::new(configured(base_url).endpoint().unwrap()).unwrap();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let error = runtime.block_on(fetch::load_catalog(&client)).unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(error.to_string().contains("X-MICROCMS-API-KEY header is invalid."));
}

#[test]
fn test_config_and_preferences_round_trip_through_files() {
    let dir = TempDir::new().unwrap();

    let config_path = dir.path().join("config.toml");
    let mut config = HubConfig::default();
    config.set_value("service_domain", "demo").unwrap();
    config.set_value("api_key", "k").unwrap();
    config.set_value("default_view", "list").unwrap();
    config.save_to(&config_path).unwrap();

    let loaded = HubConfig::load_from(&config_path).unwrap();
    assert!(loaded.is_configured());
    assert_eq!(loaded.default_view, ViewMode::List);
    assert_eq!(
        loaded.endpoint().unwrap().category_url(Category::Scripts),
        "https://demo.microcms.io/api/v1/scripts"
    );

    let prefs_path = dir.path().join("prefs.toml");
    assert_eq!(Preferences::load_from(&prefs_path).locale, Locale::Ja);
    Preferences { locale: Locale::En }.save_to(&prefs_path).unwrap();
    assert_eq!(Preferences::load_from(&prefs_path).locale, Locale::En);
}
