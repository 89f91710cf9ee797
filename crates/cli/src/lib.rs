//! Termlib CLI Library
//!
//! This crate provides the interactive menu for exercising terminal control
//! sequences by hand. It reads commands from standard input, parses them, and
//! drives the [`termlib_core::emitter::Emitter`].
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command`]: Pure parsing of input lines into commands
//! - [`dispatcher`]: The read-parse-execute loop
//! - [`menu`]: Menu and farewell text
//!
//! # Examples
//!
//! ```bash
//! # Start the menu with default settings
//! termlib
//!
//! # Draw characters one cell to the right instead of one above
//! termlib --config-path ./termlib.yml
//!
//! # Show which sequences each command writes
//! RUST_LOG=debug termlib
//! ```

pub mod cli_args;
pub mod command;
pub mod dispatcher;
pub mod menu;
