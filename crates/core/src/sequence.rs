//! The VT100 control sequences this library knows how to write.
//!
//! Each [`Sequence`] is a [`crossterm::Command`], so it can be queued into any
//! writer alongside crossterm's own commands:
//!
//! ```
//! use crossterm::queue;
//! use termlib_core::sequence::Sequence;
//! use termlib_core::types::Color;
//!
//! let mut out = Vec::new();
//! queue!(out, Sequence::SetForeground(Color::Red), Sequence::ResetStyle)?;
//! assert_eq!(out, b"\x1b[31m\x1b[0m");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fmt::{self, Display, Formatter};

use crossterm::Command;

use crate::types::{Color, Direction};

/// Control sequence introducer, `ESC [`.
pub const CSI: &str = "\x1b[";

/// Restores the position saved with [`Sequence::SaveCursor`].
pub const RESTORE_CURSOR: &str = "\x1b7";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    /// `CSI 0 m`
    ResetStyle,
    /// `CSI 2 J`. Leaves the cursor where it was on most terminals.
    ClearScreen,
    /// `CSI <column> ; <row> f`, 1-based and passed through unclamped.
    MoveTo { column: i32, row: i32 },
    /// `CSI 3<n> m`
    SetForeground(Color),
    /// `CSI 4<n> m`
    SetBackground(Color),
    /// `CSI 4 m`. Only [`Sequence::ResetStyle`] turns it off.
    SetUnderline,
    /// `CSI <amount> A|B|C|D`
    MoveCursor { direction: Direction, amount: u16 },
    /// `CSI s`
    SaveCursor,
    /// `ESC 7`
    RestoreCursor,
}

impl Command for Sequence {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match *self {
            Sequence::ResetStyle => write!(f, "{CSI}0m"),
            Sequence::ClearScreen => write!(f, "{CSI}2J"),
            Sequence::MoveTo { column, row } => write!(f, "{CSI}{column};{row}f"),
            Sequence::SetForeground(color) => write!(f, "{CSI}{}m", 30 + color.offset()),
            Sequence::SetBackground(color) => write!(f, "{CSI}{}m", 40 + color.offset()),
            Sequence::SetUnderline => write!(f, "{CSI}4m"),
            Sequence::MoveCursor { direction, amount } => {
                write!(f, "{CSI}{amount}{}", direction.letter())
            }
            Sequence::SaveCursor => write!(f, "{CSI}s"),
            Sequence::RestoreCursor => f.write_str(RESTORE_CURSOR),
        }
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "termlib sequences are only written as ANSI escape codes",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_ansi(f)
    }
}
