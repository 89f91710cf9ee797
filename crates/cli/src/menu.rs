use std::io::Write;

use termlib_core::error::Result;

const MENU: &str = "
Welcome to the terminal control playground
Below is the menu, feel free to choose anything!

1. Clear screen -> type 1
2. Set color (bgcolor for background color, fgcolor for foreground color)
   Color options: black, red, green, yellow, blue, magenta, cyan, white
   -> type 2 <fgcolor|bgcolor> <color>, for example: 2 bgcolor red
3. Reset display settings -> type 3
4. Move cursor to a column and row -> type 4
5. Move the cursor -> type 5
6. Display character on cursor position -> type 6
7. Display glyph -> type 7
8. Underline text -> type 8

99. The menu -> type 99
0. Exit the program -> type 0
";

pub const FAREWELL: &str = "Thank you for your visit !\nPlease don't come again";

/// Writes the list of commands to `out`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn print_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{MENU}")?;
    out.flush()?;
    Ok(())
}
