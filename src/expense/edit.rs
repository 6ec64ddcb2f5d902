//! The interactive flow for editing or deleting an existing expense.

use std::io::{BufRead, Write};

use rusqlite::Connection;

use crate::{
    Error,
    console::{print_warning, prompt_line},
    expense::{
        db::{delete_expense, get_expense, update_expense},
        domain::{CategoryName, Expense, ExpenseId, format_date, parse_amount, parse_date},
    },
};

/// Interactively pick an expense by ID, then edit or delete it.
///
/// A non-numeric or unknown ID prints a warning and returns to the caller.
/// Edits prompt for each field with the current value as the default, where
/// a blank line keeps that value and an invalid date or amount keeps it with
/// a warning. All edited fields are written in a single update.
///
/// # Errors
/// This function will return an [Error] if the console or the database fails.
/// Invalid user input never returns an error.
pub fn edit_or_delete_expense<R, W>(
    reader: &mut R,
    writer: &mut W,
    connection: &Connection,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let Some(id_input) = prompt_line(reader, writer, "Expense ID: ")? else {
        return Ok(());
    };

    let Ok(id) = id_input.parse::<ExpenseId>() else {
        print_warning(writer, format!("\"{id_input}\" is not a valid expense ID."))?;
        return Ok(());
    };

    let expense = match get_expense(id, connection) {
        Ok(expense) => expense,
        Err(Error::NotFound) => {
            print_warning(writer, format!("No expense with ID {id}."))?;
            return Ok(());
        }
        Err(error) => return Err(error),
    };

    let Some(action) = prompt_line(reader, writer, "Edit or delete? [e/d]: ")? else {
        return Ok(());
    };

    match action.to_lowercase().as_str() {
        "e" | "edit" => edit_expense(reader, writer, connection, expense),
        "d" | "delete" => delete_with_confirmation(reader, writer, connection, id),
        other => {
            print_warning(
                writer,
                format!("\"{other}\" is not an action, enter e to edit or d to delete."),
            )?;
            Ok(())
        }
    }
}

fn edit_expense<R, W>(
    reader: &mut R,
    writer: &mut W,
    connection: &Connection,
    mut expense: Expense,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Press enter to keep the current value.")?;

    let date_prompt = format!("Date [{}]: ", format_date(expense.date));
    let Some(date_input) = prompt_line(reader, writer, &date_prompt)? else {
        return Ok(());
    };
    if !date_input.is_empty() {
        match parse_date(&date_input) {
            Ok(date) => expense.date = date,
            Err(_) => print_warning(
                writer,
                format!(
                    "\"{date_input}\" is not a valid date, keeping {}.",
                    format_date(expense.date)
                ),
            )?,
        }
    }

    let amount_prompt = format!("Amount [{}]: ", expense.amount);
    let Some(amount_input) = prompt_line(reader, writer, &amount_prompt)? else {
        return Ok(());
    };
    if !amount_input.is_empty() {
        match parse_amount(&amount_input) {
            Ok(amount) => expense.amount = amount,
            Err(_) => print_warning(
                writer,
                format!(
                    "\"{amount_input}\" is not a valid amount, keeping {}.",
                    expense.amount
                ),
            )?,
        }
    }

    let category_prompt = format!("Category [{}]: ", expense.category);
    let Some(category_input) = prompt_line(reader, writer, &category_prompt)? else {
        return Ok(());
    };
    if !category_input.is_empty() {
        // A trimmed, non-empty line is always a valid category name.
        expense.category = CategoryName::new_unchecked(&category_input);
    }

    let note_prompt = format!("Note [{}]: ", expense.note.as_deref().unwrap_or_default());
    let Some(note_input) = prompt_line(reader, writer, &note_prompt)? else {
        return Ok(());
    };
    if !note_input.is_empty() {
        expense.note = Some(note_input);
    }

    update_expense(&expense, connection)?;
    tracing::info!("updated expense {}", expense.id);

    writeln!(writer, "Updated expense {}.", expense.id)?;

    Ok(())
}

fn delete_with_confirmation<R, W>(
    reader: &mut R,
    writer: &mut W,
    connection: &Connection,
    id: ExpenseId,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let confirm_prompt = format!("Delete expense {id}? [y/N]: ");
    let Some(answer) = prompt_line(reader, writer, &confirm_prompt)? else {
        return Ok(());
    };

    if !answer.eq_ignore_ascii_case("y") {
        writeln!(writer, "Cancelled, expense {id} was not deleted.")?;
        return Ok(());
    }

    delete_expense(id, connection)?;
    tracing::info!("deleted expense {id}");

    writeln!(writer, "Deleted expense {id}.")?;

    Ok(())
}
