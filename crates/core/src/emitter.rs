//! Writes control sequences to an output stream.
//!
//! The [`Emitter`] never tracks what the terminal is displaying; it only turns
//! typed requests into bytes. Every operation flushes so the effect is visible
//! before the next prompt is read.

use std::io::Write;

use crossterm::queue;
use crossterm::style::Print;
use log::debug;

use crate::error::Result;
use crate::sequence::Sequence;
use crate::types::{Color, CursorOffset, Direction};

/// Black heart suit, drawn by the glyph command.
pub const GLYPH: char = '\u{2665}';

/// Returns the decorative character used with [`Emitter::set_char_under_cursor`].
#[must_use]
pub fn glyph() -> char {
    GLYPH
}

/// Writes control sequences to `W`, one flushed write per operation.
///
/// ```
/// use termlib_core::emitter::Emitter;
///
/// let mut emitter = Emitter::new(Vec::new());
/// emitter.move_to(-1, 5)?;
/// assert_eq!(emitter.into_inner(), b"\x1b[-1;5f");
/// # Ok::<(), termlib_core::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Emitter<W: Write> {
    out: W,
    char_offset: CursorOffset,
}

impl<W: Write> Emitter<W> {
    /// Creates an emitter that draws single characters one cell above the cursor.
    pub fn new(out: W) -> Self {
        Self::with_char_offset(out, CursorOffset::default())
    }

    /// Creates an emitter that draws single characters at `char_offset`.
    pub fn with_char_offset(out: W, char_offset: CursorOffset) -> Self {
        Self { out, char_offset }
    }

    /// The stream sequences are written to. Prompts and messages share it.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Gives back the wrapped stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Offset used by [`Emitter::set_char_under_cursor`].
    #[must_use]
    pub fn char_offset(&self) -> CursorOffset {
        self.char_offset
    }

    fn emit(&mut self, sequence: Sequence) -> Result<()> {
        debug!("Emitting {:?}", sequence);
        queue!(self.out, sequence)?;
        self.out.flush()?;
        Ok(())
    }

    /// Resets colors and attributes (underline, brightness) to terminal defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn reset_style(&mut self) -> Result<()> {
        self.emit(Sequence::ResetStyle)
    }

    /// Clears the whole screen. The cursor position afterwards is up to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.emit(Sequence::ClearScreen)
    }

    /// Moves the cursor to an absolute, 1-based position. Values are written as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn move_to(&mut self, column: i32, row: i32) -> Result<()> {
        self.emit(Sequence::MoveTo { column, row })
    }

    /// Sets the foreground color. Text already printed keeps its color.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.emit(Sequence::SetForeground(color))
    }

    /// Sets the background color. Text already printed keeps its color.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn set_background(&mut self, color: Color) -> Result<()> {
        self.emit(Sequence::SetBackground(color))
    }

    /// Underlines subsequent text. Some terminals render it slanted instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn set_underline(&mut self) -> Result<()> {
        self.emit(Sequence::SetUnderline)
    }

    /// Moves the cursor relative to where it is; the terminal clamps at the edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn move_cursor(&mut self, direction: Direction, amount: u16) -> Result<()> {
        self.emit(Sequence::MoveCursor { direction, amount })
    }

    /// Draws `character` at the configured offset from the cursor, then puts the
    /// cursor back where it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream cannot be written.
    pub fn set_char_under_cursor(&mut self, character: char) -> Result<()> {
        let CursorOffset { direction, amount } = self.char_offset;
        debug!("Drawing {:?} at {} {}", character, amount, direction);

        queue!(
            self.out,
            Sequence::SaveCursor,
            Sequence::MoveCursor { direction, amount },
            Print(character),
            Sequence::RestoreCursor
        )?;
        self.out.flush()?;
        Ok(())
    }
}
