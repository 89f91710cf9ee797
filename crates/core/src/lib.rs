//! Termlib Core Library
//!
//! This crate turns typed terminal requests into ANSI/VT100 control sequences
//! and writes them to an output stream. It never models what the terminal is
//! displaying; cursor position and active style live only in the terminal.
//!
//! # Key Features
//!
//! - **Sequences**: Every supported control sequence as a [`crossterm::Command`]
//! - **Emitter**: Style, color, screen and cursor operations over any writer
//! - **Configuration**: Optional YAML settings, such as where characters are drawn
//! - **Error Handling**: Error types for console and configuration failures
//!
//! # Examples
//!
//! ```
//! use termlib_core::emitter::Emitter;
//! use termlib_core::types::Color;
//!
//! let mut emitter = Emitter::new(Vec::new());
//! emitter.set_foreground(Color::Green)?;
//! emitter.reset_style()?;
//! assert_eq!(emitter.into_inner(), b"\x1b[32m\x1b[0m");
//! # Ok::<(), termlib_core::error::Error>(())
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod sequence;
pub mod types;
