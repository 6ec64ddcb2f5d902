//! Shared helpers for interactive console prompts.
//!
//! Every helper takes the input and output streams as generic parameters so
//! that interactive flows can be driven from byte slices in tests.

use std::io::{BufRead, Write};

use time::Date;

use crate::{
    Error,
    expense::{CategoryName, parse_amount, parse_date},
};

/// Print `prompt` and read one line of input, trimmed of surrounding
/// whitespace.
///
/// Returns `None` when the input stream has reached end of file, which callers
/// should treat as a request to cancel the current operation.
pub fn prompt_line<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<String>, Error>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Keep asking until the user enters a valid YYYY-MM-DD date.
///
/// Returns `None` if the input stream ends before a valid date is entered.
pub fn prompt_date<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<Date>, Error>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(input) = prompt_line(reader, writer, prompt)? else {
            return Ok(None);
        };

        match parse_date(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(error) => print_warning(writer, error)?,
        }
    }
}

/// Keep asking until the user enters a valid amount.
///
/// Returns `None` if the input stream ends before a valid amount is entered.
pub fn prompt_amount<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<f64>, Error>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(input) = prompt_line(reader, writer, prompt)? else {
            return Ok(None);
        };

        match parse_amount(&input) {
            Ok(amount) => return Ok(Some(amount)),
            Err(error) => print_warning(writer, error)?,
        }
    }
}

/// Keep asking until the user enters a non-empty category name.
///
/// Returns `None` if the input stream ends before a valid category is entered.
pub fn prompt_category<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<CategoryName>, Error>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(input) = prompt_line(reader, writer, prompt)? else {
            return Ok(None);
        };

        match CategoryName::new(&input) {
            Ok(category) => return Ok(Some(category)),
            Err(error) => print_warning(writer, error)?,
        }
    }
}

/// Print a warning in bold red text, capitalising the first letter.
pub fn print_warning<W: Write>(writer: &mut W, warning: impl ToString) -> Result<(), Error> {
    writeln!(
        writer,
        "\x1b[31;1m{}\x1b[0m",
        capitalise_first_char(&warning.to_string())
    )?;

    Ok(())
}

/// From https://crates.io/crates/capitalize
fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::with_capacity(0);
    };
    first.to_uppercase().chain(chars).collect()
}
