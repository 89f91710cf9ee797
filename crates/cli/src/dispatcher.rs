//! The read-parse-execute loop behind the interactive menu.
//!
//! A [`Dispatcher`] owns both console streams for its whole life. Each line is
//! parsed (prompting for follow-ups), executed, and only then is the next line
//! read. Invalid input is reported and the menu shown again; the loop only ends
//! on the exit command or at end of input.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use termlib_core::emitter::{glyph, Emitter};
use termlib_core::error::Result;

use crate::command::{parse_command, ColorTarget, Command, Prompter};
use crate::menu::{print_menu, FAREWELL};

pub const CHOICE_PROMPT: &str = "Your choice is:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingCommand,
    Terminated,
}

#[derive(Debug)]
pub struct Dispatcher<R: BufRead, W: Write> {
    input: R,
    emitter: Emitter<W>,
    state: State,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    pub fn new(input: R, emitter: Emitter<W>) -> Self {
        Self {
            input,
            emitter,
            state: State::AwaitingCommand,
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_emitter(self) -> Emitter<W> {
        self.emitter
    }

    /// Shows the menu, then handles commands until exit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn run(&mut self) -> Result<()> {
        print_menu(self.emitter.writer())?;

        while self.state == State::AwaitingCommand {
            self.step()?;
        }

        Ok(())
    }

    /// Reads and handles a single command.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn step(&mut self) -> Result<()> {
        let Some(line) = self.prompt(CHOICE_PROMPT)? else {
            info!("End of input, stopping");
            self.state = State::Terminated;
            return Ok(());
        };

        let command = parse_command(&line, self)?;
        self.execute(command)
    }

    /// Runs `command` against the emitter.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Executing {:?}", command);

        match command {
            Command::Exit => {
                writeln!(self.emitter.writer(), "{FAREWELL}")?;
                self.emitter.writer().flush()?;
                self.state = State::Terminated;
            }
            Command::ClearScreen => self.emitter.clear_screen()?,
            Command::SetColor {
                target: ColorTarget::Foreground,
                color,
            } => self.emitter.set_foreground(color)?,
            Command::SetColor {
                target: ColorTarget::Background,
                color,
            } => self.emitter.set_background(color)?,
            Command::ResetStyle => self.emitter.reset_style()?,
            Command::MoveTo { column, row } => self.emitter.move_to(column, row)?,
            Command::MoveCursor { direction, amount } => {
                self.emitter.move_cursor(direction, amount)?;
            }
            Command::SetCharAtCursor { character } => {
                self.emitter.clear_screen()?;
                self.emitter.set_char_under_cursor(character)?;
            }
            Command::ShowGlyph => {
                self.emitter.clear_screen()?;
                self.emitter.set_char_under_cursor(glyph())?;
            }
            Command::SetUnderline => self.emitter.set_underline()?,
            Command::ShowMenu => print_menu(self.emitter.writer())?,
            Command::Invalid(reason) => {
                warn!("Invalid input: {}", reason);
                writeln!(self.emitter.writer(), "Invalid command - {reason}")?;
                print_menu(self.emitter.writer())?;
            }
        }

        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for Dispatcher<R, W> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        let out = self.emitter.writer();
        writeln!(out, "{message}")?;
        out.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail parsing like any other typo
        let mut input = Vec::new();
        if self.input.read_until(b'\n', &mut input)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&input)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        Ok(Some(line))
    }
}
