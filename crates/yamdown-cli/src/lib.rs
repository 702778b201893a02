//! Command-line front end for the Yamdown reader.
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing
//! - [`app`]: Logging setup and command handlers

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;

pub use app::YamdownCli;
pub use cli::{CliArgs, Command};
