//! Library surface of the `bp` binary, split out so integration tests can
//! drive commands against a mock engine.

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
