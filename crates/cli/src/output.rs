//! Structured output envelope for all CLI commands.
//!
//! Every command produces one result envelope on stdout:
//!
//! ```json
//! {
//!   "ok": true,
//!   "command": "navigate",
//!   "data": { ... },
//!   "timings": { "durationMs": 1234 },
//!   "artifacts": []
//! }
//! ```
//!
//! On failure `data` is replaced by an `error` object carrying a stable
//! code and a human-readable message.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output (default, best for agents)
    #[default]
    Json,
    /// Newline-delimited JSON (streaming)
    Ndjson,
    /// Human-readable text
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Ndjson => write!(f, "ndjson"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// The result envelope returned by all commands.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
    /// Whether the command succeeded
    pub ok: bool,

    /// Command name (e.g., "navigate", "click", "screenshot")
    pub command: String,

    /// Inputs used for this command (for traceability)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<CommandInputs>,

    /// Command-specific result data (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error information (only present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,

    /// Timing information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<Timings>,

    /// Screenshot artifacts produced by the command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
}

/// Inputs that were used for the command (for traceability)
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommandInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Error information for failed commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Stable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Browser failed to launch
    BrowserLaunchFailed,
    /// Navigation to URL failed
    NavigationFailed,
    /// Selector did not match any elements
    SelectorNotFound,
    /// Operation timed out
    Timeout,
    /// JavaScript evaluation failed
    JsEvalFailed,
    /// Screenshot capture failed
    ScreenshotFailed,
    /// File I/O error
    IoError,
    /// Session lifecycle misuse
    SessionError,
    /// Invalid input provided
    InvalidInput,
    /// Unknown/internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::BrowserLaunchFailed => write!(f, "BROWSER_LAUNCH_FAILED"),
            ErrorCode::NavigationFailed => write!(f, "NAVIGATION_FAILED"),
            ErrorCode::SelectorNotFound => write!(f, "SELECTOR_NOT_FOUND"),
            ErrorCode::Timeout => write!(f, "TIMEOUT"),
            ErrorCode::JsEvalFailed => write!(f, "JS_EVAL_FAILED"),
            ErrorCode::ScreenshotFailed => write!(f, "SCREENSHOT_FAILED"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::SessionError => write!(f, "SESSION_ERROR"),
            ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// A file produced by the command, currently always a screenshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub artifact_type: String,
    pub path: PathBuf,
}

impl Artifact {
    pub fn screenshot(path: PathBuf) -> Self {
        Self {
            artifact_type: "screenshot".to_string(),
            path,
        }
    }
}

/// Timing information for the command
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    pub duration_ms: u64,
}

impl From<Duration> for Timings {
    fn from(d: Duration) -> Self {
        Self {
            duration_ms: d.as_millis() as u64,
        }
    }
}

/// Builder for [`CommandResult`] envelopes.
pub struct ResultBuilder<T: Serialize> {
    command: String,
    inputs: Option<CommandInputs>,
    data: Option<T>,
    error: Option<CommandError>,
    artifacts: Vec<Artifact>,
    start_time: Instant,
}

impl<T: Serialize> ResultBuilder<T> {
    /// Starts an envelope; the timer runs from this call until `build`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            inputs: None,
            data: None,
            error: None,
            artifacts: Vec::new(),
            start_time: Instant::now(),
        }
    }

    pub fn inputs(mut self, inputs: CommandInputs) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
        self.error = Some(CommandError {
            code,
            message: message.into(),
        });
        self
    }

    pub fn artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn build(self) -> CommandResult<T> {
        let ok = self.error.is_none() && self.data.is_some();
        CommandResult {
            ok,
            command: self.command,
            inputs: self.inputs,
            data: self.data,
            error: self.error,
            timings: Some(Timings::from(self.start_time.elapsed())),
            artifacts: self.artifacts,
        }
    }
}

/// Print a command result to stdout in the specified format
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{json}");
            }
        }
        OutputFormat::Ndjson => {
            if let Ok(json) = serde_json::to_string(result) {
                println!("{json}");
            }
        }
        OutputFormat::Text => {
            print_result_text(result);
        }
    }
}

fn print_result_text<T: Serialize>(result: &CommandResult<T>) {
    let mut stdout = io::stdout().lock();

    if result.ok {
        if let Some(ref data) = result.data {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                let _ = writeln!(stdout, "{json}");
            }
        }
    } else if let Some(ref error) = result.error {
        let _ = writeln!(stdout, "Error [{}]: {}", error.code, error.message);
    }

    for artifact in &result.artifacts {
        let _ = writeln!(
            stdout,
            "Saved {}: {}",
            artifact.artifact_type,
            artifact.path.display()
        );
    }

    if let Some(ref timings) = result.timings {
        let _ = writeln!(stdout, "Completed in {}ms", timings.duration_ms);
    }
}

/// A command result with no data (for side-effect-only commands)
pub type EmptyResult = CommandResult<()>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let result = ResultBuilder::new("navigate")
            .inputs(CommandInputs {
                url: Some("https://example.test".into()),
                ..Default::default()
            })
            .data(serde_json::json!({ "title": "Example" }))
            .build();

        assert!(result.ok);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["command"], "navigate");
        assert_eq!(value["inputs"]["url"], "https://example.test");
        assert_eq!(value["data"]["title"], "Example");
        assert!(value.get("error").is_none());
        assert!(value["timings"]["durationMs"].is_u64());
    }

    #[test]
    fn failure_envelope_shape() {
        let result: EmptyResult = ResultBuilder::new("click")
            .error(ErrorCode::SelectorNotFound, "element not found: #missing")
            .build();

        assert!(!result.ok);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["error"]["code"], "SELECTOR_NOT_FOUND");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn builder_without_data_is_not_ok() {
        let result: EmptyResult = ResultBuilder::new("wait").build();
        assert!(!result.ok);
    }

    #[test]
    fn artifacts_serialize_with_type_and_path() {
        let result = ResultBuilder::new("screenshot")
            .data(serde_json::json!({}))
            .artifact(Artifact::screenshot(PathBuf::from("/tmp/001-manual.png")))
            .build();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["artifacts"][0]["artifactType"], "screenshot");
        assert_eq!(value["artifacts"][0]["path"], "/tmp/001-manual.png");
    }

    #[test]
    fn error_codes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::BrowserLaunchFailed).unwrap();
        assert_eq!(json, "\"BROWSER_LAUNCH_FAILED\"");
        assert_eq!(ErrorCode::JsEvalFailed.to_string(), "JS_EVAL_FAILED");
    }
}
