#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use termlib_cli::command::{
        AMOUNT_PROMPT, CHARACTER_PROMPT, COLUMN_PROMPT, DIRECTION_PROMPT, ROW_PROMPT,
    };
    use termlib_cli::dispatcher::{Dispatcher, State, CHOICE_PROMPT};
    use termlib_cli::menu::FAREWELL;
    use termlib_core::emitter::Emitter;
    use termlib_core::types::{CursorOffset, Direction};

    /// Runs a whole session over `input` and returns everything written.
    fn run_session(input: &str) -> (State, String) {
        run_session_with_offset(input, CursorOffset::default())
    }

    fn run_session_with_offset(input: &str, offset: CursorOffset) -> (State, String) {
        run_raw_session(input.as_bytes(), offset)
    }

    fn run_raw_session(input: &[u8], offset: CursorOffset) -> (State, String) {
        let mut dispatcher = Dispatcher::new(
            Cursor::new(input.to_vec()),
            Emitter::with_char_offset(Vec::new(), offset),
        );
        dispatcher.run().unwrap();

        let state = dispatcher.state();
        let output = String::from_utf8(dispatcher.into_emitter().into_inner()).unwrap();
        (state, output)
    }

    fn escape_sequences(output: &str) -> usize {
        output.matches('\x1b').count()
    }

    #[test]
    fn test_set_foreground_red() {
        let (_, output) = run_session("2 fgcolor red\n0\n");
        assert!(output.contains("\x1b[31m"));
        assert_eq!(escape_sequences(&output), 1);
    }

    #[test]
    fn test_unknown_color_writes_no_sequence() {
        let (state, output) = run_session("2 fgcolor purple\n0\n");

        assert_eq!(state, State::Terminated);
        assert_eq!(escape_sequences(&output), 0);
        assert!(output.contains("Invalid command - Unknown color \"purple\""));
    }

    #[test]
    fn test_invalid_input_redisplays_menu() {
        let (_, output) = run_session("banana\n0\n");

        // Once at start, once after the error
        assert_eq!(output.matches("Below is the menu").count(), 2);
        assert!(output.contains("Unrecognized command: \"banana\""));
    }

    #[test]
    fn test_menu_command_shows_menu_again() {
        let (_, output) = run_session("99\n0\n");
        assert_eq!(output.matches("Below is the menu").count(), 2);
        assert!(!output.contains("Invalid command"));
    }

    #[test]
    fn test_exit_stops_reading_input() {
        let (state, output) = run_session("0\n1\n8\n");

        assert_eq!(state, State::Terminated);
        assert!(output.ends_with(&format!("{FAREWELL}\n")));
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 1);
        assert_eq!(escape_sequences(&output), 0);
    }

    #[test]
    fn test_end_of_input_terminates_without_farewell() {
        let (state, output) = run_session("3\n");

        assert_eq!(state, State::Terminated);
        assert!(output.contains("\x1b[0m"));
        assert!(!output.contains(FAREWELL));
    }

    #[test]
    fn test_move_cursor_session() {
        let (_, output) = run_session("5\nbackward\n3\n0\n");

        let direction_at = output.find(DIRECTION_PROMPT).unwrap();
        let amount_at = output.find(AMOUNT_PROMPT).unwrap();
        let sequence_at = output.find("\x1b[3D").unwrap();
        assert!(direction_at < amount_at);
        assert!(amount_at < sequence_at);
    }

    #[test]
    fn test_move_cursor_zero_amount_is_invalid() {
        let (state, output) = run_session("5\nup\n0\n0\n");

        assert_eq!(state, State::Terminated);
        assert!(output.contains("Please write a number: \"0\" is not a positive whole number"));
        assert_eq!(escape_sequences(&output), 0);
    }

    #[test]
    fn test_move_to_session() {
        let (_, output) = run_session("4\n20\n5\n0\n");
        assert!(output.contains("\x1b[20;5f"));
    }

    #[test]
    fn test_move_to_passes_coordinates_through() {
        let (_, output) = run_session("4\n-1\n5\n4\n0\n100000\n0\n");

        assert!(output.contains("\x1b[-1;5f"));
        assert!(output.contains("\x1b[0;100000f"));
        assert!(!output.contains("Invalid command"));
    }

    #[test]
    fn test_move_to_non_numeric_column_is_invalid() {
        let (state, output) = run_session("4\nabc\n0\n");

        assert_eq!(state, State::Terminated);
        assert!(output.contains("Please write a number: \"abc\" is not a whole number"));
        // The row is never asked for once the column fails
        assert!(!output.contains(ROW_PROMPT));
        assert_eq!(escape_sequences(&output), 0);
        assert!(output.ends_with(&format!("{FAREWELL}\n")));
    }

    #[test]
    fn test_move_to_non_numeric_row_is_invalid() {
        let (state, output) = run_session("4\n3\n2.5\n0\n");

        assert_eq!(state, State::Terminated);
        assert!(output.contains(COLUMN_PROMPT));
        assert!(output.contains(ROW_PROMPT));
        assert!(output.contains("Please write a number: \"2.5\" is not a whole number"));
        assert_eq!(escape_sequences(&output), 0);
    }

    #[test]
    fn test_non_utf8_line_is_reported_and_session_continues() {
        let (state, output) = run_raw_session(b"\xff\xfe\n0\n", CursorOffset::default());

        assert_eq!(state, State::Terminated);
        assert!(output.contains("Invalid command - Unrecognized command"));
        assert_eq!(output.matches("Below is the menu").count(), 2);
        assert!(output.ends_with(&format!("{FAREWELL}\n")));
    }

    #[test]
    fn test_set_char_session() {
        let offset = CursorOffset {
            direction: Direction::Down,
            amount: 2,
        };
        let (_, output) = run_session_with_offset("6\n#hash\n0\n", offset);

        assert!(output.contains(CHARACTER_PROMPT));
        assert!(output.contains("\x1b[2J\x1b[s\x1b[2B#\x1b7"));
    }

    #[test]
    fn test_several_commands_in_one_session() {
        let (_, output) = run_session("2 bgcolor Blue\n8\n1\n3\n0\n");

        let sequences = ["\x1b[44m", "\x1b[4m", "\x1b[2J", "\x1b[0m"];
        let mut last = 0;
        for sequence in sequences {
            let at = output[last..].find(sequence).unwrap() + last;
            last = at + sequence.len();
        }
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 5);
    }
}
