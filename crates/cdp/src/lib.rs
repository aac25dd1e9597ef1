//! Chrome DevTools Protocol engine.
//!
//! Drives a locally installed Chrome or Chromium over CDP via
//! `chromiumoxide`. The browser runs as a child process; a spawned task
//! pumps the CDP event stream for the lifetime of the session.

mod detect;
mod engine;

pub use detect::find_chrome;
pub use engine::{CdpBrowser, CdpContext, CdpEngine, CdpPage};
