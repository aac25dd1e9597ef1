use std::path::PathBuf;
use std::time::Duration;

use bp_engine::{LaunchConfig, Viewport};

/// Default directory for the numbered screenshot trace.
pub const DEFAULT_SCREENSHOT_DIR: &str = "/tmp/browserpilot-screenshots";

/// Fully owned session configuration.
///
/// Merged from these defaults and caller overrides before
/// [`Session::launch`](crate::Session::launch); immutable afterwards.
/// Deployment concerns (headless env toggles, display targets) belong to
/// the caller — this type never reads process environment.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether the browser launches headless.
    pub headless: bool,
    /// Viewport applied to the session's page.
    pub viewport: Viewport,
    /// Engine pacing delay between actions, for observable runs.
    pub slow_mo: Duration,
    /// Fixed delay after click/scroll, letting page reactions render before
    /// the auto-screenshot. A heuristic, not a correctness guarantee.
    pub settle: Duration,
    /// Per-operation element-resolution timeout.
    pub timeout: Duration,
    /// Directory for screenshot artifacts; created on first use.
    pub screenshot_dir: PathBuf,
    /// Explicit browser executable passed through to the engine.
    pub executable: Option<PathBuf>,
    /// Extra browser process arguments passed through to the engine.
    pub args: Vec<String>,
}

impl SessionConfig {
    /// Baseline config: headless, 1920x1080, 50ms pacing, 500ms settle,
    /// 5s element timeout.
    pub fn new() -> Self {
        Self {
            headless: true,
            viewport: Viewport::default(),
            slow_mo: Duration::from_millis(50),
            settle: Duration::from_millis(500),
            timeout: Duration::from_secs(5),
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
            executable: None,
            args: Vec::new(),
        }
    }

    /// Projects the launch-relevant subset for the engine.
    pub(crate) fn launch_config(&self) -> LaunchConfig {
        LaunchConfig {
            headless: self.headless,
            viewport: self.viewport,
            slow_mo: self.slow_mo,
            executable: self.executable.clone(),
            args: self.args.clone(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_baseline() {
        let cfg = SessionConfig::new();
        assert!(cfg.headless);
        assert_eq!(cfg.slow_mo, Duration::from_millis(50));
        assert_eq!(cfg.settle, Duration::from_millis(500));
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.screenshot_dir, PathBuf::from(DEFAULT_SCREENSHOT_DIR));
    }

    #[test]
    fn launch_config_carries_overrides() {
        let mut cfg = SessionConfig::new();
        cfg.headless = false;
        cfg.args.push("--display=:99".into());
        let launch = cfg.launch_config();
        assert!(!launch.headless);
        assert_eq!(launch.args, vec!["--display=:99".to_string()]);
        assert_eq!(launch.viewport, cfg.viewport);
    }
}
