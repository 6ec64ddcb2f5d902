//! Monthly and per-category spending summaries.

use std::io::Write;

use rusqlite::Connection;

use crate::{
    Error,
    expense::db::{category_totals, monthly_totals},
    format::format_currency,
};

/// Print total spending grouped by calendar month and by category.
///
/// Months are listed chronologically and categories by descending total.
/// Each section prints a notice instead when there are no expenses.
///
/// # Errors
/// This function will return an [Error] if the console or the database fails.
pub fn print_summary<W: Write>(writer: &mut W, connection: &Connection) -> Result<(), Error> {
    let by_month = monthly_totals(connection)?;

    writeln!(writer, "Spending by month:")?;
    if by_month.is_empty() {
        writeln!(writer, "No expenses recorded.")?;
    } else {
        for row in by_month {
            writeln!(writer, "{:<10}  {:>12}", row.month, format_currency(row.total))?;
        }
    }

    writeln!(writer)?;

    let by_category = category_totals(connection)?;

    writeln!(writer, "Spending by category:")?;
    if by_category.is_empty() {
        writeln!(writer, "No expenses recorded.")?;
    } else {
        for row in by_category {
            writeln!(
                writer,
                "{:<16}  {:>12}",
                row.category.as_ref(),
                format_currency(row.total)
            )?;
        }
    }

    Ok(())
}
