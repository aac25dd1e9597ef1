use std::path::Path;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bp_engine::{Engine, EngineError, LaunchConfig, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::detect;

/// Element lookup poll interval while a timeout window is open.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Upper bound on the best-effort idle wait after an action that may or may
/// not trigger a navigation.
const IDLE_WAIT_CAP: Duration = Duration::from_secs(10);

/// Chrome process handle plus the task pumping its CDP event stream.
pub struct CdpBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
    slow_mo: Duration,
}

/// Chrome's default browsing context. CDP pages land in it implicitly, so
/// the handle carries no state; it exists so context release stays an
/// explicit lifecycle step.
pub struct CdpContext;

pub struct CdpPage {
    page: Page,
    slow_mo: Duration,
}

/// [`Engine`] implementation over the Chrome DevTools Protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdpEngine;

impl CdpEngine {
    fn browser_config(config: &LaunchConfig) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(config.viewport.width, config.viewport.height)
            .viewport(chromiumoxide::handler::viewport::Viewport {
                width: config.viewport.width,
                height: config.viewport.height,
                device_scale_factor: Some(1.0),
                emulating_mobile: false,
                is_landscape: true,
                has_touch: false,
            });

        builder = if config.headless {
            builder.new_headless_mode()
        } else {
            builder.with_head()
        };

        match &config.executable {
            Some(path) => builder = builder.chrome_executable(path),
            None => {
                if let Some(path) = detect::find_chrome() {
                    builder = builder.chrome_executable(path);
                }
            }
        }

        for arg in &config.args {
            builder = builder.arg(arg.as_str());
        }

        builder.build().map_err(EngineError::Launch)
    }

    /// Pacing delay before each page action. Zero disables it.
    async fn pace(page: &CdpPage) {
        if !page.slow_mo.is_zero() {
            tokio::time::sleep(page.slow_mo).await;
        }
    }

    /// Polls for `selector` until it resolves or the window closes.
    ///
    /// Returns `ElementNotFound` on exhaustion; `wait_for` remaps that to a
    /// timeout since its caller asked about time, not existence.
    async fn locate(page: &CdpPage, selector: &str, timeout: Duration) -> Result<Element> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(element) = page.page.find_element(selector).await {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(EngineError::ElementNotFound {
                    selector: selector.to_string(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl Engine for CdpEngine {
    type Browser = CdpBrowser;
    type Context = CdpContext;
    type Page = CdpPage;

    async fn launch(&self, config: &LaunchConfig) -> Result<Self::Browser> {
        let browser_config = Self::browser_config(config)?;
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| EngineError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!(target = "bp", error = %e, "cdp handler error");
                }
            }
            debug!(target = "bp", "cdp event stream ended");
        });

        Ok(CdpBrowser {
            browser,
            handler_task,
            slow_mo: config.slow_mo,
        })
    }

    async fn new_context(&self, _browser: &Self::Browser) -> Result<Self::Context> {
        Ok(CdpContext)
    }

    async fn new_page(
        &self,
        browser: &Self::Browser,
        _context: &Self::Context,
    ) -> Result<Self::Page> {
        let page = browser
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(CdpPage {
            page,
            slow_mo: browser.slow_mo,
        })
    }

    async fn goto(&self, page: &Self::Page, url: &str) -> Result<()> {
        Self::pace(page).await;
        page.page.goto(url).await.map_err(|e| EngineError::Navigation {
            url: url.to_string(),
            source: e.into(),
        })?;
        page.page
            .wait_for_navigation()
            .await
            .map_err(|e| EngineError::Navigation {
                url: url.to_string(),
                source: e.into(),
            })?;
        Ok(())
    }

    async fn fill(
        &self,
        page: &Self::Page,
        selector: &str,
        value: &str,
        timeout: Duration,
    ) -> Result<()> {
        Self::pace(page).await;
        let element = Self::locate(page, selector, timeout).await?;
        element
            .click()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        element
            .type_str(value)
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(())
    }

    async fn click(&self, page: &Self::Page, selector: &str, timeout: Duration) -> Result<()> {
        Self::pace(page).await;
        let element = Self::locate(page, selector, timeout).await?;
        element
            .click()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(())
    }

    async fn press(
        &self,
        page: &Self::Page,
        selector: &str,
        key: &str,
        timeout: Duration,
    ) -> Result<()> {
        Self::pace(page).await;
        let element = Self::locate(page, selector, timeout).await?;
        element
            .press_key(key)
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(())
    }

    async fn text(&self, page: &Self::Page, selector: &str, timeout: Duration) -> Result<String> {
        let element = Self::locate(page, selector, timeout).await?;
        let text = element
            .inner_text()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(text.unwrap_or_default())
    }

    async fn title(&self, page: &Self::Page) -> Result<String> {
        let title = page
            .page
            .get_title()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(title.unwrap_or_default())
    }

    async fn url(&self, page: &Self::Page) -> Result<String> {
        let url = page
            .page
            .url()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(url.unwrap_or_default())
    }

    async fn wait_for(&self, page: &Self::Page, selector: &str, timeout: Duration) -> Result<()> {
        match Self::locate(page, selector, timeout).await {
            Ok(_) => Ok(()),
            Err(EngineError::ElementNotFound { selector }) => Err(EngineError::Timeout {
                ms: timeout.as_millis() as u64,
                what: format!("selector {selector}"),
            }),
            Err(other) => Err(other),
        }
    }

    async fn evaluate(&self, page: &Self::Page, script: &str) -> Result<serde_json::Value> {
        let result = page
            .page
            .evaluate(script)
            .await
            .map_err(|e| EngineError::Evaluation(e.to_string()))?;
        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    async fn screenshot(&self, page: &Self::Page, path: &Path) -> Result<()> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(false)
            .build();
        let bytes = page
            .page
            .screenshot(params)
            .await
            .map_err(|e| EngineError::Screenshot {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| EngineError::Screenshot {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        Ok(())
    }

    async fn wait_for_idle(&self, page: &Self::Page) -> Result<()> {
        // Best effort: a submit may or may not navigate, so neither a miss
        // nor the cap elapsing is an error.
        match tokio::time::timeout(IDLE_WAIT_CAP, page.page.wait_for_navigation()).await {
            Ok(Err(e)) => debug!(target = "bp", error = %e, "idle wait ended with error"),
            Err(_) => debug!(target = "bp", "idle wait capped"),
            Ok(Ok(_)) => {}
        }
        Ok(())
    }

    async fn close_page(&self, page: Self::Page) -> Result<()> {
        page.page
            .close()
            .await
            .map(|_| ())
            .map_err(|e| EngineError::Protocol(e.to_string()))
    }

    async fn close_context(&self, _context: Self::Context) -> Result<()> {
        // The default browsing context dies with the browser process.
        Ok(())
    }

    async fn close_browser(&self, browser: Self::Browser) -> Result<()> {
        let CdpBrowser {
            mut browser,
            handler_task,
            ..
        } = browser;
        let closed = browser
            .close()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()));
        handler_task.abort();
        closed.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_engine::Viewport;
    use std::path::PathBuf;

    fn launch_config() -> LaunchConfig {
        LaunchConfig {
            headless: true,
            viewport: Viewport::default(),
            slow_mo: Duration::ZERO,
            // Any path satisfies the builder; the process is never spawned.
            executable: Some(PathBuf::from("/usr/bin/true")),
            args: vec!["--disable-gpu".into()],
        }
    }

    #[test]
    fn browser_config_accepts_explicit_executable_and_args() {
        assert!(CdpEngine::browser_config(&launch_config()).is_ok());
    }

    #[test]
    fn headed_config_builds() {
        let mut cfg = launch_config();
        cfg.headless = false;
        cfg.args.push("--display=:99".into());
        assert!(CdpEngine::browser_config(&cfg).is_ok());
    }
}
