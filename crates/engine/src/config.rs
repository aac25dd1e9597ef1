use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Page viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Fully owned browser-launch configuration.
///
/// This type is the stable handoff between the session helper and engine
/// implementations; the session merges caller overrides into it once,
/// before launch, and it never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct LaunchConfig {
    /// Whether the browser launches headless.
    pub headless: bool,
    /// Viewport applied to pages in the launched browser.
    pub viewport: Viewport,
    /// Delay inserted by the engine between page actions, to make runs
    /// observable. Zero disables pacing.
    pub slow_mo: Duration,
    /// Explicit browser executable. Engines auto-detect when unset.
    pub executable: Option<PathBuf>,
    /// Extra process arguments (e.g. a display target for headed runs).
    pub args: Vec<String>,
}

impl LaunchConfig {
    /// Baseline config: headless, default viewport, no pacing.
    pub fn new() -> Self {
        Self {
            headless: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_config_defaults_to_headless() {
        let cfg = LaunchConfig::new();
        assert!(cfg.headless);
        assert_eq!(cfg.viewport, Viewport::default());
        assert!(cfg.slow_mo.is_zero());
        assert!(cfg.executable.is_none());
        assert!(cfg.args.is_empty());
    }

    #[test]
    fn viewport_default_is_full_hd() {
        let vp = Viewport::default();
        assert_eq!((vp.width, vp.height), (1920, 1080));
    }
}
