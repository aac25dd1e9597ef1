//! Session configuration assembly for one CLI invocation.
//!
//! Environment handling lives here and nowhere else: `CHROMIUM_MODE`
//! (`headed`/`headless`) and `CHROMIUM_DISPLAY` (X display for headed runs)
//! are read once per invocation and merged with the flags. An explicit
//! `--headed` flag wins over the environment.

use std::time::Duration;

use bp::SessionConfig;

use crate::cli::Cli;

/// Environment overrides, captured once so resolution stays a pure function.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub mode: Option<String>,
    pub display: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            mode: std::env::var("CHROMIUM_MODE").ok(),
            display: std::env::var("CHROMIUM_DISPLAY").ok(),
        }
    }
}

/// Builds the session config for this invocation from flags and environment.
pub fn session_config(cli: &Cli, env: &EnvOverrides) -> SessionConfig {
    let mut config = SessionConfig::new();

    config.headless = resolve_headless(cli.headed, env.mode.as_deref());

    if let Some(dir) = &cli.screenshot_dir {
        config.screenshot_dir = dir.clone();
    }
    if let Some(path) = &cli.executable {
        config.executable = Some(path.clone());
    }
    if let Some(ms) = cli.slow_mo {
        config.slow_mo = Duration::from_millis(ms);
    }
    if let Some(ms) = cli.settle {
        config.settle = Duration::from_millis(ms);
    }
    if let Some(ms) = cli.timeout {
        config.timeout = Duration::from_millis(ms);
    }

    if !config.headless {
        if let Some(display) = &env.display {
            config.args.push(format!("--display={display}"));
        }
    }

    config
}

fn resolve_headless(headed_flag: bool, mode: Option<&str>) -> bool {
    if headed_flag {
        return false;
    }
    match mode {
        Some("headed") => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn defaults_are_headless_with_no_display_arg() {
        let cli = parse(&["bp", "title", "https://example.test"]);
        let config = session_config(&cli, &EnvOverrides::default());
        assert!(config.headless);
        assert!(config.args.is_empty());
    }

    #[test]
    fn env_mode_headed_disables_headless() {
        let cli = parse(&["bp", "title", "https://example.test"]);
        let env = EnvOverrides {
            mode: Some("headed".into()),
            display: Some(":99".into()),
        };
        let config = session_config(&cli, &env);
        assert!(!config.headless);
        assert_eq!(config.args, vec!["--display=:99".to_string()]);
    }

    #[test]
    fn headed_flag_wins_over_env() {
        let cli = parse(&["bp", "--headed", "title", "https://example.test"]);
        let env = EnvOverrides {
            mode: Some("headless".into()),
            display: None,
        };
        assert!(!session_config(&cli, &env).headless);
    }

    #[test]
    fn display_ignored_for_headless_runs() {
        let cli = parse(&["bp", "title", "https://example.test"]);
        let env = EnvOverrides {
            mode: None,
            display: Some(":99".into()),
        };
        assert!(session_config(&cli, &env).args.is_empty());
    }

    #[test]
    fn timing_flags_override_defaults() {
        let cli = parse(&[
            "bp",
            "--slow-mo",
            "0",
            "--settle",
            "100",
            "--timeout",
            "10000",
            "title",
            "https://example.test",
        ]);
        let config = session_config(&cli, &EnvOverrides::default());
        assert!(config.slow_mo.is_zero());
        assert_eq!(config.settle, Duration::from_millis(100));
        assert_eq!(config.timeout, Duration::from_millis(10_000));
    }
}
