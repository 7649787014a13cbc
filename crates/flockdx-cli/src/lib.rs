//! flockdx-cli library root.
//!
//! Re-exports the argument definitions, command handlers and config so
//! integration tests can exercise them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
