//! Browser session helper.
//!
//! One [`Session`] owns one browser, one context and one page, obtained from
//! a pluggable [`Engine`](bp_engine::Engine), and exposes a reduced,
//! intention-revealing operation set. Every mutating operation logs what it
//! is doing and captures a numbered screenshot afterwards, so a run leaves a
//! step-by-step visual trace in the configured directory.
//!
//! ```no_run
//! # async fn run() -> Result<(), bp::SessionError> {
//! use bp::{Session, SessionConfig};
//! use bp_cdp::CdpEngine;
//!
//! let mut session = Session::new(CdpEngine, SessionConfig::new());
//! session
//!     .launch()
//!     .await?
//!     .goto("https://www.wikipedia.org")
//!     .await?
//!     .fill("#searchInput", "Artificial Intelligence")
//!     .await?
//!     .click("button[type=\"submit\"]")
//!     .await?;
//! let summary = session.summarize().await?;
//! println!("{} links on {}", summary.links, summary.url);
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod session;
mod shot;
mod summary;
pub mod testing;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use session::{DEFAULT_SEARCH_SELECTOR, Session, SessionState};
pub use summary::PageSummary;
