//! The expense tracker's top level menu loop.

use std::io::{BufRead, Write};

use rusqlite::Connection;

use crate::{
    Error,
    console::{print_warning, prompt_line},
    expense::{add_expense, edit_or_delete_expense, print_summary, view_expenses},
};

const MAIN_MENU: &str = "1. Add expense
2. View expenses
3. Spending summary
4. Edit or delete an expense
5. Exit";

/// Run the expense tracker's main menu until the user exits.
///
/// The menu is reprinted after every operation. Choosing exit or reaching end
/// of input returns normally, and an unknown choice prints a warning and shows
/// the menu again.
///
/// # Errors
/// This function will return an [Error] if the console or the database fails.
pub fn run_menu<R, W>(
    reader: &mut R,
    writer: &mut W,
    connection: &Connection,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(writer)?;
        writeln!(writer, "{MAIN_MENU}")?;

        let Some(choice) = prompt_line(reader, writer, "Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_expense(reader, writer, connection)?,
            "2" => view_expenses(reader, writer, connection)?,
            "3" => print_summary(writer, connection)?,
            "4" => edit_or_delete_expense(reader, writer, connection)?,
            "5" => {
                writeln!(writer, "Goodbye!")?;
                return Ok(());
            }
            other => print_warning(
                writer,
                format!("\"{other}\" is not a menu option, enter a number from 1 to 5."),
            )?,
        }
    }
}
