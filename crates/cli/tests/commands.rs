//! Command execution against the mock engine: envelope error mapping and
//! the screenshot trace left behind by one-shot invocations.

use std::path::Path;
use std::time::Duration;

use bp::testing::MockEngine;
use bp::{Session, SessionConfig};
use bp_cli::cli::Commands;
use bp_cli::commands;
use bp_cli::output::{ErrorCode, OutputFormat};

fn session_in(dir: &Path) -> (MockEngine, Session<MockEngine>) {
    let engine = MockEngine::new();
    let mut config = SessionConfig::new();
    config.screenshot_dir = dir.to_path_buf();
    config.settle = Duration::ZERO;
    config.slow_mo = Duration::ZERO;
    (engine.clone(), Session::new(engine, config))
}

#[tokio::test]
async fn navigate_leaves_a_screenshot_trace() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, mut session) = session_in(dir.path());
    engine.state().title = "Example".into();

    let command = Commands::Navigate {
        url: "https://example.test".into(),
    };
    commands::run(&mut session, &command, OutputFormat::Ndjson)
        .await
        .unwrap();

    assert!(dir.path().join("001-navigate.png").exists());
}

#[tokio::test]
async fn click_on_missing_selector_maps_to_selector_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, mut session) = session_in(dir.path());
    engine.state().known_selectors.push("#present".into());

    let command = Commands::Click {
        url: "https://example.test".into(),
        selector: "#missing".into(),
    };
    let err = commands::run(&mut session, &command, OutputFormat::Ndjson)
        .await
        .unwrap_err();

    let cmd_err = err.to_command_error();
    assert_eq!(cmd_err.code, ErrorCode::SelectorNotFound);
    assert!(cmd_err.message.contains("#missing"));
}

#[tokio::test]
async fn wait_override_maps_timeout_code() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, mut session) = session_in(dir.path());
    engine.state().known_selectors.push("#present".into());

    let command = Commands::Wait {
        url: "https://example.test".into(),
        selector: "#gone".into(),
        timeout_ms: Some(250),
    };
    let err = commands::run(&mut session, &command, OutputFormat::Json)
        .await
        .unwrap_err();
    assert_eq!(err.to_command_error().code, ErrorCode::Timeout);
}

#[tokio::test]
async fn summarize_reports_page_signals() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, mut session) = session_in(dir.path());
    engine.state().eval.insert(
        "*".into(),
        serde_json::json!({
            "title": "Docs",
            "url": "https://docs.test/",
            "h1": ["Docs"],
            "links": 12,
            "forms": 0,
        }),
    );

    let command = Commands::Summarize {
        url: "https://docs.test/".into(),
    };
    commands::run(&mut session, &command, OutputFormat::Text)
        .await
        .unwrap();
}

#[tokio::test]
async fn search_command_drives_fill_submit_settle() {
    let dir = tempfile::tempdir().unwrap();
    let (engine, mut session) = session_in(dir.path());

    let command = Commands::Search {
        url: "https://example.test".into(),
        query: "rust".into(),
        selector: Some("#search".into()),
    };
    commands::run(&mut session, &command, OutputFormat::Ndjson)
        .await
        .unwrap();

    let calls = engine.calls();
    assert!(calls.contains(&"fill #search=rust".to_string()));
    assert!(calls.contains(&"press #search Enter".to_string()));
    assert!(calls.contains(&"wait_for_idle".to_string()));
}
