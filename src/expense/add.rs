//! The interactive flow for recording a new expense.

use std::io::{BufRead, Write};

use rusqlite::Connection;

use crate::{
    Error,
    console::{prompt_amount, prompt_category, prompt_date, prompt_line},
    expense::{db::create_expense, domain::format_date},
    format::format_currency,
};

/// Interactively collect one expense and insert it.
///
/// Each field is re-prompted until valid. Reaching end of input at any prompt
/// cancels the operation without inserting anything.
///
/// # Errors
/// This function will return an [Error] if the console or the database fails.
/// Invalid user input is handled by re-prompting and never returns an error.
pub fn add_expense<R, W>(
    reader: &mut R,
    writer: &mut W,
    connection: &Connection,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let Some(date) = prompt_date(reader, writer, "Date (YYYY-MM-DD): ")? else {
        return Ok(());
    };

    let Some(amount) = prompt_amount(reader, writer, "Amount: ")? else {
        return Ok(());
    };

    let Some(category) = prompt_category(reader, writer, "Category: ")? else {
        return Ok(());
    };

    let Some(note_input) = prompt_line(reader, writer, "Note (optional): ")? else {
        return Ok(());
    };
    let note = if note_input.is_empty() {
        None
    } else {
        Some(note_input)
    };

    let expense = create_expense(date, amount, category, note, connection)?;
    tracing::info!("added expense {}", expense.id);

    writeln!(
        writer,
        "Added expense {}: {} {} {}.",
        expense.id,
        format_date(expense.date),
        format_currency(expense.amount),
        expense.category,
    )?;

    Ok(())
}

#[cfg(test)]
mod add_expense_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        expense::{
            add::add_expense,
            db::{ExpenseQuery, count_expenses, query_expenses},
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn add_then_view_all_returns_the_record() {
        let conn = get_test_connection();
        let mut input = "2024-01-15\n12.50\nFood\nlunch\n".as_bytes();
        let mut output = Vec::new();

        add_expense(&mut input, &mut output, &conn).expect("Could not add expense");

        let expenses =
            query_expenses(&ExpenseQuery::default(), &conn).expect("Could not query expenses");
        assert_eq!(expenses.len(), 1);

        let expense = &expenses[0];
        assert_eq!(expense.date, date!(2024 - 01 - 15));
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category.as_ref(), "Food");
        assert_eq!(expense.note, Some("lunch".to_string()));

        let output = String::from_utf8(output).unwrap();
        assert!(
            output.contains(&format!("Added expense {}", expense.id)),
            "confirmation should name the new ID, got: {output}"
        );
    }

    #[test]
    fn invalid_date_is_reprompted() {
        let conn = get_test_connection();
        let mut input = "15/01/2024\n2024-01-15\n12.50\nFood\n\n".as_bytes();
        let mut output = Vec::new();

        add_expense(&mut input, &mut output, &conn).expect("Could not add expense");

        let expenses =
            query_expenses(&ExpenseQuery::default(), &conn).expect("Could not query expenses");
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].date, date!(2024 - 01 - 15));

        let output = String::from_utf8(output).unwrap();
        assert!(
            output.contains("15/01/2024"),
            "warning should echo the bad date, got: {output}"
        );
    }

    #[test]
    fn invalid_amount_is_reprompted() {
        let conn = get_test_connection();
        let mut input = "2024-01-15\ntwelve\n12.50\nFood\n\n".as_bytes();
        let mut output = Vec::new();

        add_expense(&mut input, &mut output, &conn).expect("Could not add expense");

        let expenses =
            query_expenses(&ExpenseQuery::default(), &conn).expect("Could not query expenses");
        assert_eq!(expenses[0].amount, 12.5);
    }

    #[test]
    fn empty_category_is_reprompted() {
        let conn = get_test_connection();
        let mut input = "2024-01-15\n12.50\n\nFood\n\n".as_bytes();
        let mut output = Vec::new();

        add_expense(&mut input, &mut output, &conn).expect("Could not add expense");

        let expenses =
            query_expenses(&ExpenseQuery::default(), &conn).expect("Could not query expenses");
        assert_eq!(expenses[0].category.as_ref(), "Food");
    }

    #[test]
    fn blank_note_is_stored_as_none() {
        let conn = get_test_connection();
        let mut input = "2024-01-15\n12.50\nFood\n\n".as_bytes();
        let mut output = Vec::new();

        add_expense(&mut input, &mut output, &conn).expect("Could not add expense");

        let expenses =
            query_expenses(&ExpenseQuery::default(), &conn).expect("Could not query expenses");
        assert_eq!(expenses[0].note, None);
    }

    #[test]
    fn end_of_input_cancels_without_inserting() {
        let conn = get_test_connection();
        let mut input = "2024-01-15\n12.50\n".as_bytes();
        let mut output = Vec::new();

        add_expense(&mut input, &mut output, &conn).expect("Operation should cancel cleanly");

        let count = count_expenses(&conn).expect("Could not count expenses");
        assert_eq!(count, 0);
    }
}
