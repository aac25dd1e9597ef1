//! Test doubles for exercising [`Session`](crate::Session) without a
//! browser process.
//!
//! [`MockEngine`] records every call it receives and serves canned page
//! state. Screenshots are written as stub bytes so filename behavior is
//! observable on disk.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use bp_engine::{Engine, EngineError, LaunchConfig, Result};

#[derive(Debug, Default)]
pub struct MockState {
    /// Flat call log, one entry per engine call, in order.
    pub calls: Vec<String>,
    /// Selectors that resolve. When empty, every selector resolves.
    pub known_selectors: Vec<String>,
    pub title: String,
    pub url: String,
    /// Element text by selector. Missing entries resolve to "".
    pub texts: HashMap<String, String>,
    /// Evaluation results by script. The `"*"` key answers any script;
    /// missing entries resolve to null.
    pub eval: HashMap<String, serde_json::Value>,
    pub fail_launch: bool,
    pub fail_close_page: bool,
}

pub struct MockBrowser;
pub struct MockContext;
pub struct MockPage;

/// Engine double backed by shared state, so tests keep a handle to the
/// call log after handing the engine to a session.
#[derive(Clone, Default)]
pub struct MockEngine {
    state: Arc<Mutex<MockState>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.state().calls.push(call.into());
    }

    fn resolves(&self, selector: &str) -> bool {
        let state = self.state();
        state.known_selectors.is_empty()
            || state.known_selectors.iter().any(|s| s == selector)
    }
}

#[async_trait]
impl Engine for MockEngine {
    type Browser = MockBrowser;
    type Context = MockContext;
    type Page = MockPage;

    async fn launch(&self, config: &LaunchConfig) -> Result<Self::Browser> {
        self.record(format!("launch headless={}", config.headless));
        if self.state().fail_launch {
            return Err(EngineError::Launch("mock launch failure".into()));
        }
        Ok(MockBrowser)
    }

    async fn new_context(&self, _browser: &Self::Browser) -> Result<Self::Context> {
        self.record("new_context");
        Ok(MockContext)
    }

    async fn new_page(
        &self,
        _browser: &Self::Browser,
        _context: &Self::Context,
    ) -> Result<Self::Page> {
        self.record("new_page");
        Ok(MockPage)
    }

    async fn goto(&self, _page: &Self::Page, url: &str) -> Result<()> {
        self.record(format!("goto {url}"));
        self.state().url = url.to_string();
        Ok(())
    }

    async fn fill(
        &self,
        _page: &Self::Page,
        selector: &str,
        value: &str,
        _timeout: Duration,
    ) -> Result<()> {
        self.record(format!("fill {selector}={value}"));
        if !self.resolves(selector) {
            return Err(EngineError::ElementNotFound { selector: selector.into() });
        }
        Ok(())
    }

    async fn click(&self, _page: &Self::Page, selector: &str, _timeout: Duration) -> Result<()> {
        self.record(format!("click {selector}"));
        if !self.resolves(selector) {
            return Err(EngineError::ElementNotFound { selector: selector.into() });
        }
        Ok(())
    }

    async fn press(
        &self,
        _page: &Self::Page,
        selector: &str,
        key: &str,
        _timeout: Duration,
    ) -> Result<()> {
        self.record(format!("press {selector} {key}"));
        if !self.resolves(selector) {
            return Err(EngineError::ElementNotFound { selector: selector.into() });
        }
        Ok(())
    }

    async fn text(
        &self,
        _page: &Self::Page,
        selector: &str,
        _timeout: Duration,
    ) -> Result<String> {
        self.record(format!("text {selector}"));
        if !self.resolves(selector) {
            return Err(EngineError::ElementNotFound { selector: selector.into() });
        }
        Ok(self.state().texts.get(selector).cloned().unwrap_or_default())
    }

    async fn title(&self, _page: &Self::Page) -> Result<String> {
        self.record("title");
        Ok(self.state().title.clone())
    }

    async fn url(&self, _page: &Self::Page) -> Result<String> {
        self.record("url");
        Ok(self.state().url.clone())
    }

    async fn wait_for(
        &self,
        _page: &Self::Page,
        selector: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.record(format!("wait_for {selector}"));
        if !self.resolves(selector) {
            return Err(EngineError::Timeout {
                ms: timeout.as_millis() as u64,
                what: format!("selector {selector}"),
            });
        }
        Ok(())
    }

    async fn evaluate(&self, _page: &Self::Page, script: &str) -> Result<serde_json::Value> {
        self.record(format!("evaluate {script}"));
        let state = self.state();
        Ok(state
            .eval
            .get(script)
            .or_else(|| state.eval.get("*"))
            .cloned()
            .unwrap_or(serde_json::Value::Null))
    }

    async fn screenshot(&self, _page: &Self::Page, path: &Path) -> Result<()> {
        self.record(format!("screenshot {}", path.display()));
        std::fs::write(path, b"png").map_err(|err| EngineError::Screenshot {
            path: path.to_path_buf(),
            source: err.into(),
        })?;
        Ok(())
    }

    async fn wait_for_idle(&self, _page: &Self::Page) -> Result<()> {
        self.record("wait_for_idle");
        Ok(())
    }

    async fn close_page(&self, _page: Self::Page) -> Result<()> {
        self.record("close_page");
        if self.state().fail_close_page {
            return Err(EngineError::Protocol("mock page close failure".into()));
        }
        Ok(())
    }

    async fn close_context(&self, _context: Self::Context) -> Result<()> {
        self.record("close_context");
        Ok(())
    }

    async fn close_browser(&self, _browser: Self::Browser) -> Result<()> {
        self.record("close_browser");
        Ok(())
    }
}
