//! Automation-engine capability surface.
//!
//! The session helper in `bp-session` never talks to a browser directly; it
//! drives whatever implements [`Engine`]. The trait covers exactly the
//! primitives a session needs — launch, context/page creation, navigation
//! with an idle wait, element actions with per-operation timeouts, script
//! evaluation, viewport screenshots, and handle release — and nothing else.
//! `bp-cdp` provides the Chrome DevTools Protocol implementation; tests use
//! the mock engine shipped with `bp-session`.

mod config;
mod error;

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

pub use config::{LaunchConfig, Viewport};
pub use error::{EngineError, Result};

/// Capability surface an automation engine supplies to the session helper.
///
/// Handle types are engine-specific; the session owns one of each and hands
/// them back for every operation. All operations are failure-transparent:
/// no retries, no suppression — timeouts and missing elements surface as
/// [`EngineError`] values and the caller decides what to do.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Browser process handle.
    type Browser: Send;
    /// Isolated browsing-context handle.
    type Context: Send;
    /// Page handle.
    type Page: Send;

    /// Starts a browser process. Launch failure is fatal; callers do not retry.
    async fn launch(&self, config: &LaunchConfig) -> Result<Self::Browser>;

    /// Creates a browsing context in the launched browser.
    async fn new_context(&self, browser: &Self::Browser) -> Result<Self::Context>;

    /// Opens a page in the context.
    async fn new_page(&self, browser: &Self::Browser, context: &Self::Context)
    -> Result<Self::Page>;

    /// Navigates and waits for the engine's network-idle equivalent signal.
    async fn goto(&self, page: &Self::Page, url: &str) -> Result<()>;

    /// Sets the value of the first element matching `selector`.
    ///
    /// Fails with [`EngineError::ElementNotFound`] if the selector resolves
    /// to zero elements, or [`EngineError::Timeout`] if resolution exceeds
    /// `timeout`.
    async fn fill(
        &self,
        page: &Self::Page,
        selector: &str,
        value: &str,
        timeout: Duration,
    ) -> Result<()>;

    /// Clicks the first element matching `selector`.
    async fn click(&self, page: &Self::Page, selector: &str, timeout: Duration) -> Result<()>;

    /// Sends a key press (e.g. `"Enter"`) to the first element matching `selector`.
    async fn press(
        &self,
        page: &Self::Page,
        selector: &str,
        key: &str,
        timeout: Duration,
    ) -> Result<()>;

    /// Returns the text content of the first element matching `selector`.
    async fn text(&self, page: &Self::Page, selector: &str, timeout: Duration) -> Result<String>;

    /// Returns the page title.
    async fn title(&self, page: &Self::Page) -> Result<String>;

    /// Returns the page's current URL.
    async fn url(&self, page: &Self::Page) -> Result<String>;

    /// Blocks until `selector` resolves or `timeout` elapses.
    async fn wait_for(&self, page: &Self::Page, selector: &str, timeout: Duration) -> Result<()>;

    /// Evaluates a script in page context and returns its result.
    ///
    /// Script errors propagate verbatim as [`EngineError::Evaluation`].
    async fn evaluate(&self, page: &Self::Page, script: &str) -> Result<serde_json::Value>;

    /// Captures a viewport-only (not full-page) PNG to `path`.
    async fn screenshot(&self, page: &Self::Page, path: &Path) -> Result<()>;

    /// Waits for in-flight page activity to settle (best effort).
    async fn wait_for_idle(&self, page: &Self::Page) -> Result<()>;

    /// Releases a page handle.
    async fn close_page(&self, page: Self::Page) -> Result<()>;

    /// Releases a context handle.
    async fn close_context(&self, context: Self::Context) -> Result<()>;

    /// Releases the browser process handle.
    async fn close_browser(&self, browser: Self::Browser) -> Result<()>;
}
