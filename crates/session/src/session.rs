use std::path::PathBuf;
use std::time::Duration;

use bp_engine::Engine;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::shot;
use crate::summary::{self, PageSummary};

/// Selector list tried by [`Session::search`] when the caller does not name
/// a search field.
pub const DEFAULT_SEARCH_SELECTOR: &str =
    "input[name=\"q\"], input[type=\"search\"], #search, .search-input";

const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight)";

/// Session lifecycle. Every public operation checks this and fails fast on
/// misuse instead of relying on empty-handle checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unlaunched,
    Active,
    Closed,
}

/// One browser session: one browser process, one context, one page, under
/// exclusive control of this helper.
///
/// Mutating operations return `&mut Self` so calls chain under `?`; read
/// operations return their value and capture no screenshot. The screenshot
/// sequence counter is strictly increasing and gapless, starting at 1.
pub struct Session<E: Engine> {
    engine: E,
    config: SessionConfig,
    state: SessionState,
    browser: Option<E::Browser>,
    context: Option<E::Context>,
    page: Option<E::Page>,
    shot_seq: u32,
}

impl<E: Engine> std::fmt::Debug for Session<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("shot_seq", &self.shot_seq)
            .finish_non_exhaustive()
    }
}

impl<E: Engine> Session<E> {
    /// Creates an unlaunched session over `engine` with owned configuration.
    pub fn new(engine: E, config: SessionConfig) -> Self {
        Self {
            engine,
            config,
            state: SessionState::Unlaunched,
            browser: None,
            context: None,
            page: None,
            shot_seq: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Acquires browser, context and page from the engine.
    ///
    /// Engine launch failure is fatal and is not retried.
    pub async fn launch(&mut self) -> Result<&mut Self> {
        match self.state {
            SessionState::Unlaunched => {}
            SessionState::Active => return Err(SessionError::AlreadyLaunched),
            SessionState::Closed => return Err(SessionError::Closed),
        }

        info!(target = "bp", headless = self.config.headless, "launching browser...");
        let browser = self.engine.launch(&self.config.launch_config()).await?;
        let context = self.engine.new_context(&browser).await?;
        let page = self.engine.new_page(&browser, &context).await?;

        self.browser = Some(browser);
        self.context = Some(context);
        self.page = Some(page);
        self.state = SessionState::Active;
        info!(target = "bp", "browser launched");
        Ok(self)
    }

    /// Navigates to `url`, waits for the engine's network-idle signal, then
    /// captures a screenshot labeled `navigate`.
    pub async fn goto(&mut self, url: &str) -> Result<&mut Self> {
        info!(target = "bp", %url, "navigate");
        self.engine.goto(self.page()?, url).await?;
        self.finish_action("navigate", false).await?;
        Ok(self)
    }

    /// Sets the value of the element matched by `selector`.
    ///
    /// Fails if the selector resolves to zero elements within the configured
    /// timeout.
    pub async fn fill(&mut self, selector: &str, value: &str) -> Result<&mut Self> {
        info!(target = "bp", %selector, chars = value.len(), "fill");
        self.engine
            .fill(self.page()?, selector, value, self.config.timeout)
            .await?;
        let label = format!("fill-{}", shot::sanitize_fragment(selector));
        self.finish_action(&label, false).await?;
        Ok(self)
    }

    /// Clicks the element matched by `selector`, waits the settle delay for
    /// page reactions to render, then screenshots.
    pub async fn click(&mut self, selector: &str) -> Result<&mut Self> {
        info!(target = "bp", %selector, "click element");
        self.engine
            .click(self.page()?, selector, self.config.timeout)
            .await?;
        let label = format!("click-{}", shot::sanitize_fragment(selector));
        self.finish_action(&label, true).await?;
        Ok(self)
    }

    /// Returns the text content of the element matched by `selector`.
    pub async fn text(&self, selector: &str) -> Result<String> {
        let text = self
            .engine
            .text(self.page()?, selector, self.config.timeout)
            .await?;
        debug!(target = "bp", %selector, %text, "text content");
        Ok(text)
    }

    /// Returns the page title.
    pub async fn title(&self) -> Result<String> {
        let title = self.engine.title(self.page()?).await?;
        debug!(target = "bp", %title, "page title");
        Ok(title)
    }

    /// Returns the page's current URL.
    pub async fn url(&self) -> Result<String> {
        let url = self.engine.url(self.page()?).await?;
        debug!(target = "bp", %url, "current url");
        Ok(url)
    }

    /// Blocks until `selector` resolves, or fails with a timeout error.
    /// `timeout` defaults to the configured per-operation timeout.
    pub async fn wait_for(
        &mut self,
        selector: &str,
        timeout: Option<Duration>,
    ) -> Result<&mut Self> {
        let timeout = timeout.unwrap_or(self.config.timeout);
        info!(
            target = "bp",
            %selector,
            timeout_ms = timeout.as_millis() as u64,
            "wait for element"
        );
        self.engine.wait_for(self.page()?, selector, timeout).await?;
        Ok(self)
    }

    /// Evaluates `script` in page context and returns its result.
    /// Script errors propagate verbatim.
    pub async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let value = self.engine.evaluate(self.page()?, script).await?;
        debug!(target = "bp", result = %value, "evaluated script");
        Ok(value)
    }

    /// Captures a viewport screenshot under the next sequence number and
    /// returns its path.
    pub async fn screenshot(&mut self, label: &str) -> Result<PathBuf> {
        self.capture(label).await
    }

    /// Scrolls the document to its maximum extent, settles, screenshots.
    pub async fn scroll_to_bottom(&mut self) -> Result<&mut Self> {
        info!(target = "bp", "scroll to bottom");
        self.engine.evaluate(self.page()?, SCROLL_SCRIPT).await?;
        self.finish_action("scroll-bottom", true).await?;
        Ok(self)
    }

    /// Fills a search field, submits with an Enter keypress, waits for the
    /// page to settle, screenshots. `selector` defaults to
    /// [`DEFAULT_SEARCH_SELECTOR`].
    pub async fn search(&mut self, query: &str, selector: Option<&str>) -> Result<&mut Self> {
        let selector = selector.unwrap_or(DEFAULT_SEARCH_SELECTOR);
        info!(target = "bp", %query, %selector, "search");

        let page = self.page()?;
        self.engine
            .fill(page, selector, query, self.config.timeout)
            .await?;
        self.engine
            .press(page, selector, "Enter", self.config.timeout)
            .await?;
        self.engine.wait_for_idle(page).await?;

        let label = format!("search-{}", shot::sanitize_fragment(query));
        self.finish_action(&label, false).await?;
        Ok(self)
    }

    /// Extracts the fixed page-signal record: title, URL, level-1 headings,
    /// link count, form count.
    pub async fn summarize(&self) -> Result<PageSummary> {
        let value = self
            .engine
            .evaluate(self.page()?, summary::SUMMARY_SCRIPT)
            .await?;
        let summary: PageSummary = serde_json::from_value(value)?;
        info!(
            target = "bp",
            title = %summary.title,
            h1 = summary.h1.len(),
            links = summary.links,
            forms = summary.forms,
            "page summary"
        );
        Ok(summary)
    }

    /// Releases page, context and browser, in that order.
    ///
    /// Each handle is closed only if it was acquired, and a failure closing
    /// one never blocks the others: release failures are logged and
    /// swallowed. Idempotent, including before `launch`.
    pub async fn close(&mut self) -> Result<()> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        info!(target = "bp", "closing browser...");

        if let Some(page) = self.page.take() {
            if let Err(err) = self.engine.close_page(page).await {
                warn!(target = "bp", error = %err, "failed to close page");
            }
        }
        if let Some(context) = self.context.take() {
            if let Err(err) = self.engine.close_context(context).await {
                warn!(target = "bp", error = %err, "failed to close context");
            }
        }
        if let Some(browser) = self.browser.take() {
            if let Err(err) = self.engine.close_browser(browser).await {
                warn!(target = "bp", error = %err, "failed to close browser");
            }
        }

        self.state = SessionState::Closed;
        info!(target = "bp", "browser closed");
        Ok(())
    }

    /// Post-action step shared by every mutating operation: optional settle
    /// delay, then the auto-screenshot.
    async fn finish_action(&mut self, label: &str, settle: bool) -> Result<()> {
        if settle && !self.config.settle.is_zero() {
            tokio::time::sleep(self.config.settle).await;
        }
        self.capture(label).await?;
        Ok(())
    }

    /// Captures a screenshot, committing the sequence number only on success.
    async fn capture(&mut self, label: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.config.screenshot_dir)?;
        let seq = self.shot_seq + 1;
        let path = shot::shot_path(&self.config.screenshot_dir, seq, label);
        self.engine.screenshot(self.page()?, &path).await?;
        self.shot_seq = seq;
        debug!(target = "bp", path = %path.display(), "screenshot saved");
        Ok(path)
    }

    /// State-checked page access; the single misuse gate for page operations.
    fn page(&self) -> Result<&E::Page> {
        match self.state {
            SessionState::Unlaunched => Err(SessionError::NotLaunched),
            SessionState::Closed => Err(SessionError::Closed),
            SessionState::Active => self.page.as_ref().ok_or(SessionError::NotLaunched),
        }
    }
}
