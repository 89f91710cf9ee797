//! Parsing a line of input into a [`Command`].
//!
//! Parsing never touches the console directly. Commands that need more input
//! than the first line (cursor moves, character drawing) ask a [`Prompter`]
//! for it, so tests can script the follow-up lines.

use itertools::Itertools;
use thiserror::Error;

use termlib_core::error::Result;
use termlib_core::types::{Color, Direction};

/// Source of follow-up lines for commands that prompt for their parameters.
pub trait Prompter {
    /// Shows `message` and reads one line without its terminator.
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written or read.
    fn prompt(&mut self, message: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Foreground,
    Background,
}

/// One parsed line of input. Built fresh per line and dropped after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    ClearScreen,
    SetColor { target: ColorTarget, color: Color },
    ResetStyle,
    MoveTo { column: i32, row: i32 },
    MoveCursor { direction: Direction, amount: u16 },
    SetCharAtCursor { character: char },
    ShowGlyph,
    SetUnderline,
    ShowMenu,
    Invalid(InputError),
}

/// Why a line of input could not become a command. None of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unrecognized command: \"{}\"", .0)]
    UnrecognizedCommand(String),

    #[error("Missing parameters for `{}`, usage: {}", .command, .usage)]
    MissingParameters {
        command: String,
        usage: &'static str,
    },

    #[error("Too many parameters for `{}`, usage: {}", .command, .usage)]
    UnexpectedParameters {
        command: String,
        usage: &'static str,
    },

    #[error("Unknown color target \"{}\", use `fgcolor` or `bgcolor`", .0)]
    InvalidColorTarget(String),

    #[error("Unknown color \"{}\", choose one of: {}", .0, Color::ALL.iter().join(", "))]
    InvalidColorName(String),

    #[error("Unknown direction \"{}\", choose one of: {}", .0, Direction::ALL.iter().join(", "))]
    InvalidDirectionName(String),

    #[error("Please write a number: \"{}\" is not {}", .value, .expected)]
    InvalidNumericInput {
        value: String,
        expected: &'static str,
    },
}

pub const EXIT: &str = "0";
pub const CLEAR_SCREEN: &str = "1";
pub const SET_COLOR: &str = "2";
pub const RESET_STYLE: &str = "3";
pub const MOVE_TO: &str = "4";
pub const MOVE_CURSOR: &str = "5";
pub const SET_CHAR: &str = "6";
pub const SHOW_GLYPH: &str = "7";
pub const SET_UNDERLINE: &str = "8";
pub const SHOW_MENU: &str = "99";

const SET_COLOR_USAGE: &str = "2 <fgcolor|bgcolor> <color>";

pub const COLUMN_PROMPT: &str = "Write column number:";
pub const ROW_PROMPT: &str = "Write row number:";
pub const DIRECTION_PROMPT: &str = "Direction: up, down, forward, backward";
pub const AMOUNT_PROMPT: &str = "Amount:";
pub const CHARACTER_PROMPT: &str = "Write the character:";

/// Internal failure while parsing: either the user's input or the console.
enum Failure {
    Input(InputError),
    Console(termlib_core::error::Error),
}

impl From<InputError> for Failure {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<termlib_core::error::Error> for Failure {
    fn from(value: termlib_core::error::Error) -> Self {
        Self::Console(value)
    }
}

/// Parses `line`, prompting for follow-up lines where the command needs them.
///
/// Invalid input is returned as [`Command::Invalid`], not as an error.
///
/// # Errors
///
/// Returns an error only if the prompter fails to write or read.
pub fn parse_command<P: Prompter + ?Sized>(line: &str, prompter: &mut P) -> Result<Command> {
    match try_parse(line, prompter) {
        Ok(command) => Ok(command),
        Err(Failure::Input(reason)) => Ok(Command::Invalid(reason)),
        Err(Failure::Console(e)) => Err(e),
    }
}

fn try_parse<P: Prompter + ?Sized>(
    line: &str,
    prompter: &mut P,
) -> std::result::Result<Command, Failure> {
    let tokens = line.split_whitespace().collect_vec();
    let Some((&code, params)) = tokens.split_first() else {
        return Err(InputError::UnrecognizedCommand(String::new()).into());
    };

    let command = match code {
        EXIT => no_parameters(code, params, Command::Exit)?,
        CLEAR_SCREEN => no_parameters(code, params, Command::ClearScreen)?,
        SET_COLOR => parse_set_color(params)?,
        RESET_STYLE => no_parameters(code, params, Command::ResetStyle)?,
        MOVE_TO => {
            no_parameters(code, params, ())?;
            let column = parse_coordinate(&follow_up(prompter, code, COLUMN_PROMPT)?)?;
            let row = parse_coordinate(&follow_up(prompter, code, ROW_PROMPT)?)?;
            Command::MoveTo { column, row }
        }
        MOVE_CURSOR => {
            no_parameters(code, params, ())?;
            let direction = parse_direction(&follow_up(prompter, code, DIRECTION_PROMPT)?)?;
            let amount = parse_amount(&follow_up(prompter, code, AMOUNT_PROMPT)?)?;
            Command::MoveCursor { direction, amount }
        }
        SET_CHAR => {
            no_parameters(code, params, ())?;
            let character = parse_character(&follow_up(prompter, code, CHARACTER_PROMPT)?)?;
            Command::SetCharAtCursor { character }
        }
        SHOW_GLYPH => no_parameters(code, params, Command::ShowGlyph)?,
        SET_UNDERLINE => no_parameters(code, params, Command::SetUnderline)?,
        SHOW_MENU => no_parameters(code, params, Command::ShowMenu)?,
        _ => return Err(InputError::UnrecognizedCommand(code.to_string()).into()),
    };

    Ok(command)
}

fn no_parameters<T>(code: &str, params: &[&str], value: T) -> std::result::Result<T, InputError> {
    if params.is_empty() {
        Ok(value)
    } else {
        Err(InputError::UnexpectedParameters {
            command: code.to_string(),
            usage: usage_without_parameters(code),
        })
    }
}

fn usage_without_parameters(code: &str) -> &'static str {
    match code {
        EXIT => "0",
        CLEAR_SCREEN => "1",
        RESET_STYLE => "3",
        MOVE_TO => "4 (column and row are asked for)",
        MOVE_CURSOR => "5 (direction and amount are asked for)",
        SET_CHAR => "6 (the character is asked for)",
        SHOW_GLYPH => "7",
        SET_UNDERLINE => "8",
        _ => "99",
    }
}

fn follow_up<P: Prompter + ?Sized>(
    prompter: &mut P,
    code: &str,
    message: &str,
) -> std::result::Result<String, Failure> {
    match prompter.prompt(message)? {
        Some(line) => Ok(line),
        None => Err(InputError::MissingParameters {
            command: code.to_string(),
            usage: usage_without_parameters(code),
        }
        .into()),
    }
}

fn parse_set_color(params: &[&str]) -> std::result::Result<Command, InputError> {
    let (target, color) = match params {
        [target, color] => (*target, *color),
        [] | [_] => {
            return Err(InputError::MissingParameters {
                command: SET_COLOR.to_string(),
                usage: SET_COLOR_USAGE,
            })
        }
        _ => {
            return Err(InputError::UnexpectedParameters {
                command: SET_COLOR.to_string(),
                usage: SET_COLOR_USAGE,
            })
        }
    };

    Ok(Command::SetColor {
        target: parse_target(target)?,
        color: parse_color(color)?,
    })
}

/// Matches `fgcolor` or `bgcolor`, ignoring case.
///
/// # Errors
///
/// Returns [`InputError::InvalidColorTarget`] for any other keyword.
pub fn parse_target(keyword: &str) -> std::result::Result<ColorTarget, InputError> {
    match keyword.to_lowercase().as_str() {
        "fgcolor" => Ok(ColorTarget::Foreground),
        "bgcolor" => Ok(ColorTarget::Background),
        _ => Err(InputError::InvalidColorTarget(keyword.to_string())),
    }
}

/// # Errors
///
/// Returns [`InputError::InvalidColorName`] if `name` is not one of the eight colors.
pub fn parse_color(name: &str) -> std::result::Result<Color, InputError> {
    name.parse()
        .map_err(|_| InputError::InvalidColorName(name.to_string()))
}

/// # Errors
///
/// Returns [`InputError::InvalidDirectionName`] if the trimmed line is not a direction.
pub fn parse_direction(line: &str) -> std::result::Result<Direction, InputError> {
    let name = line.trim();
    name.parse()
        .map_err(|_| InputError::InvalidDirectionName(name.to_string()))
}

/// Parses a relative movement amount, which must be at least one.
///
/// # Errors
///
/// Returns [`InputError::InvalidNumericInput`] for anything but a positive integer.
pub fn parse_amount(line: &str) -> std::result::Result<u16, InputError> {
    let value = line.trim();
    match value.parse::<u16>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(InputError::InvalidNumericInput {
            value: value.to_string(),
            expected: "a positive whole number",
        }),
    }
}

/// Parses an absolute column or row. Zero and negative values pass through;
/// the terminal decides what to do with them.
///
/// # Errors
///
/// Returns [`InputError::InvalidNumericInput`] for anything but an integer.
pub fn parse_coordinate(line: &str) -> std::result::Result<i32, InputError> {
    let value = line.trim();
    value
        .parse::<i32>()
        .map_err(|_| InputError::InvalidNumericInput {
            value: value.to_string(),
            expected: "a whole number",
        })
}

/// Takes the first character of `line`; the rest is ignored.
///
/// # Errors
///
/// Returns [`InputError::MissingParameters`] for an empty line.
pub fn parse_character(line: &str) -> std::result::Result<char, InputError> {
    line.chars().next().ok_or(InputError::MissingParameters {
        command: SET_CHAR.to_string(),
        usage: usage_without_parameters(SET_CHAR),
    })
}
