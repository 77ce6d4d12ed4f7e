//! CLI module for MediaKit
//!
//! Argument parsing and command execution for the three binaries.

pub mod args;
pub mod commands;

pub use args::{CommonArgs, DownloadArgs, EmbedArgs, TrimArgs};
