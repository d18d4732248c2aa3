//! Command-line interface
//!
//! Argument definitions and command handlers for the `confcache` binary.

pub mod args;
pub mod commands;
