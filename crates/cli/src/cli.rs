use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bp")]
#[command(about = "Browser session helper - scripted page automation with a screenshot trace")]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format: json (default), ndjson, or text
    #[arg(short = 'f', long, global = true, value_enum, default_value = "json")]
    pub format: CliOutputFormat,

    /// Run with a visible browser window
    #[arg(long, global = true)]
    pub headed: bool,

    /// Directory for the numbered screenshot trace
    #[arg(long, global = true, value_name = "DIR")]
    pub screenshot_dir: Option<PathBuf>,

    /// Browser executable to launch instead of auto-detecting
    #[arg(long, global = true, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Pacing delay between page actions (ms)
    #[arg(long, global = true, value_name = "MS")]
    pub slow_mo: Option<u64>,

    /// Settle delay after click/scroll before the auto-screenshot (ms)
    #[arg(long, global = true, value_name = "MS")]
    pub settle: Option<u64>,

    /// Element-resolution timeout per operation (ms)
    #[arg(long, global = true, value_name = "MS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI output format (clap-compatible enum)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output (default, best for agents)
    #[default]
    Json,
    /// Newline-delimited JSON (streaming)
    Ndjson,
    /// Human-readable text
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Ndjson => OutputFormat::Ndjson,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate to URL and report the resulting title
    #[command(alias = "nav")]
    Navigate {
        /// Target URL
        url: String,
    },

    /// Navigate, then fill an input field
    Fill {
        url: String,
        /// CSS selector of the field
        selector: String,
        /// Value to type
        value: String,
    },

    /// Navigate, click an element, report the URL after the click
    Click {
        url: String,
        selector: String,
    },

    /// Navigate and print the text content of an element
    Text {
        url: String,
        selector: String,
    },

    /// Navigate and print the page title
    Title { url: String },

    /// Navigate and block until a selector resolves
    Wait {
        url: String,
        selector: String,
        /// Override the element-resolution timeout (ms)
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
    },

    /// Navigate and evaluate JavaScript, printing the result
    Eval {
        url: String,
        /// JavaScript expression to evaluate
        expression: String,
    },

    /// Navigate and capture a labeled screenshot
    #[command(alias = "ss")]
    Screenshot {
        url: String,
        /// Screenshot label (sanitized into the filename)
        #[arg(short, long, default_value = "manual")]
        label: String,
    },

    /// Navigate and scroll the page to its bottom
    Scroll { url: String },

    /// Navigate, run a search via the page's search field
    Search {
        url: String,
        /// Query text
        query: String,
        /// CSS selector of the search field (defaults to common ones)
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,
    },

    /// Navigate and print a structural page summary
    #[command(alias = "sum")]
    Summarize { url: String },
}

impl Commands {
    /// Envelope command name for this subcommand.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Navigate { .. } => "navigate",
            Commands::Fill { .. } => "fill",
            Commands::Click { .. } => "click",
            Commands::Text { .. } => "text",
            Commands::Title { .. } => "title",
            Commands::Wait { .. } => "wait",
            Commands::Eval { .. } => "eval",
            Commands::Screenshot { .. } => "screenshot",
            Commands::Scroll { .. } => "scroll",
            Commands::Search { .. } => "search",
            Commands::Summarize { .. } => "summarize",
        }
    }
}
