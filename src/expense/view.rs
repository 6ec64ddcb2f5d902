//! The interactive flows for listing expenses.

use std::io::{BufRead, Write};

use rusqlite::Connection;

use crate::{
    Error,
    console::{print_warning, prompt_category, prompt_date, prompt_line},
    expense::{
        db::{ExpenseQuery, query_expenses},
        domain::{Expense, format_date},
    },
    format::{format_currency, truncate_note},
};

/// Interactively choose a view and print the matching expenses as a table.
///
/// The user picks between all expenses, expenses within an inclusive date
/// range, and expenses in an exact category. Any other choice prints a
/// warning and returns to the caller.
///
/// # Errors
/// This function will return an [Error] if the console or the database fails.
pub fn view_expenses<R, W>(
    reader: &mut R,
    writer: &mut W,
    connection: &Connection,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "1. All expenses")?;
    writeln!(writer, "2. Expenses between two dates")?;
    writeln!(writer, "3. Expenses in a category")?;

    let Some(choice) = prompt_line(reader, writer, "Choose a view: ")? else {
        return Ok(());
    };

    let filter = match choice.as_str() {
        "1" => ExpenseQuery::default(),
        "2" => {
            let Some(start) = prompt_date(reader, writer, "Start date (YYYY-MM-DD): ")? else {
                return Ok(());
            };
            let Some(end) = prompt_date(reader, writer, "End date (YYYY-MM-DD): ")? else {
                return Ok(());
            };

            ExpenseQuery {
                date_range: Some(start..=end),
                ..Default::default()
            }
        }
        "3" => {
            let Some(category) = prompt_category(reader, writer, "Category: ")? else {
                return Ok(());
            };

            ExpenseQuery {
                category: Some(category),
                ..Default::default()
            }
        }
        other => {
            print_warning(
                writer,
                format!("\"{other}\" is not a view, enter a number from 1 to 3."),
            )?;
            return Ok(());
        }
    };

    let expenses = query_expenses(&filter, connection)?;

    if expenses.is_empty() {
        writeln!(writer, "No matching expenses.")?;
        return Ok(());
    }

    render_table(writer, &expenses)?;

    Ok(())
}

fn render_table<W: Write>(writer: &mut W, expenses: &[Expense]) -> Result<(), Error> {
    writeln!(
        writer,
        "{:>6}  {:<10}  {:>12}  {:<16}  {}",
        "ID", "Date", "Amount", "Category", "Note"
    )?;

    for expense in expenses {
        let note = expense.note.as_deref().map(truncate_note).unwrap_or_default();

        writeln!(
            writer,
            "{:>6}  {:<10}  {:>12}  {:<16}  {}",
            expense.id,
            format_date(expense.date),
            format_currency(expense.amount),
            expense.category.as_ref(),
            note,
        )?;
    }

    Ok(())
}
