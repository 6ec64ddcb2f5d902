//! Database operations for expenses.

use std::ops::RangeInclusive;

use rusqlite::{Connection, Row, params_from_iter, types::Value};
use time::Date;

use crate::{
    Error,
    expense::domain::{CategoryName, Expense, ExpenseId},
};

/// Filters for querying expenses.
///
/// The default query matches every expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseQuery {
    /// Only match expenses whose date falls within this inclusive range.
    pub date_range: Option<RangeInclusive<Date>>,
    /// Only match expenses with exactly this category.
    pub category: Option<CategoryName>,
}

/// The sum of all expense amounts in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// The month the expenses fall in, as "YYYY-MM".
    pub month: String,
    /// The summed amount, rounded to two decimal places.
    pub total: f64,
}

/// The sum of all expense amounts in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category the expenses share.
    pub category: CategoryName,
    /// The summed amount, rounded to two decimal places.
    pub total: f64,
}

/// Create a new expense in the database and return it with its generated ID.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_expense(
    date: Date,
    amount: f64,
    category: CategoryName,
    note: Option<String>,
    connection: &Connection,
) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (date, amount, category, note)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, date, amount, category, note",
        )?
        .query_row((date, amount, category.as_ref(), note), map_expense_row)?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare("SELECT id, date, amount, category, note FROM expense WHERE id = :id")?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Query for expenses matching `filter`, ordered by date.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn query_expenses(filter: &ExpenseQuery, connection: &Connection) -> Result<Vec<Expense>, Error> {
    let mut query_string_parts =
        vec!["SELECT id, date, amount, category, note FROM expense".to_string()];
    let mut where_clause_parts = vec![];
    let mut query_parameters = vec![];

    if let Some(date_range) = &filter.date_range {
        where_clause_parts.push(format!(
            "date BETWEEN ?{} AND ?{}",
            query_parameters.len() + 1,
            query_parameters.len() + 2,
        ));
        query_parameters.push(Value::Text(date_range.start().to_string()));
        query_parameters.push(Value::Text(date_range.end().to_string()));
    }

    if let Some(category) = &filter.category {
        where_clause_parts.push(format!("category = ?{}", query_parameters.len() + 1));
        query_parameters.push(Value::Text(category.as_ref().to_string()));
    }

    if !where_clause_parts.is_empty() {
        query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));
    }

    // Sort by date, and then ID to keep the order stable for expenses that
    // share a date.
    query_string_parts.push("ORDER BY date ASC, id ASC".to_string());

    let query_string = query_string_parts.join(" ");
    let params = params_from_iter(query_parameters.iter());

    connection
        .prepare(&query_string)?
        .query_map(params, map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every mutable field of the stored expense with `expense.id`.
/// Returns an error if the expense doesn't exist.
pub fn update_expense(expense: &Expense, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE expense SET date = ?1, amount = ?2, category = ?3, note = ?4 WHERE id = ?5",
        (
            expense.date,
            expense.amount,
            expense.category.as_ref(),
            &expense.note,
            expense.id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingExpense);
    }

    Ok(())
}

/// Delete an expense by ID. Returns an error if the expense doesn't exist.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expense WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingExpense);
    }

    Ok(())
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expense;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Sum expense amounts by calendar month, ordered chronologically.
///
/// Relies on dates being stored as "YYYY-MM-DD" text: the first seven
/// characters are the month key, and lexicographic order on that key is
/// chronological order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn monthly_totals(connection: &Connection) -> Result<Vec<MonthlyTotal>, Error> {
    connection
        .prepare(
            "SELECT substr(date, 1, 7) AS month, ROUND(SUM(amount), 2) AS total
             FROM expense
             GROUP BY month
             ORDER BY month ASC",
        )?
        .query_map([], |row| {
            Ok(MonthlyTotal {
                month: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(|error| error.into()))
        .collect()
}

/// Sum expense amounts by category, ordered by descending total.
///
/// Categories with equal totals are ordered alphabetically so the report is
/// deterministic.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn category_totals(connection: &Connection) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT category, ROUND(SUM(amount), 2) AS total
             FROM expense
             GROUP BY category
             ORDER BY total DESC, category ASC",
        )?
        .query_map([], |row| {
            let raw_category: String = row.get(0)?;

            Ok(CategoryTotal {
                category: CategoryName::new_unchecked(&raw_category),
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(|error| error.into()))
        .collect()
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                note TEXT
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('expense', 0)",
        (),
    )?;

    // Add index used by the date-ordered views and the monthly summary.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        (),
    )?;

    Ok(())
}

fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let amount = row.get(2)?;
    let raw_category: String = row.get(3)?;
    let note = row.get(4)?;

    Ok(Expense {
        id,
        date,
        amount,
        category: CategoryName::new_unchecked(&raw_category),
        note,
    })
}



#[cfg(test)]
mod summary_tests {
    use rusqlite::Connection;
    use time::{Date, macros::date};

    use crate::{
        db::initialize,
        expense::{
            db::{CategoryTotal, MonthlyTotal, category_totals, create_expense, monthly_totals},
            domain::CategoryName,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn insert(date: Date, amount: f64, category: &str, conn: &Connection) {
        create_expense(date, amount, CategoryName::new_unchecked(category), None, conn)
            .expect("Could not create expense");
    }

    #[test]
    fn empty_table_yields_no_totals() {
        let conn = get_test_connection();

        assert_eq!(monthly_totals(&conn), Ok(vec![]));
        assert_eq!(category_totals(&conn), Ok(vec![]));
    }

    #[test]
    fn totals_sum_matching_expenses() {
        let conn = get_test_connection();
        insert(date!(2024 - 01 - 15), 12.5, "Food", &conn);
        insert(date!(2024 - 01 - 20), 7.5, "Food", &conn);

        let by_month = monthly_totals(&conn).expect("Could not sum by month");
        let by_category = category_totals(&conn).expect("Could not sum by category");

        assert_eq!(
            by_month,
            vec![MonthlyTotal {
                month: "2024-01".to_string(),
                total: 20.0,
            }]
        );
        assert_eq!(
            by_category,
            vec![CategoryTotal {
                category: CategoryName::new_unchecked("Food"),
                total: 20.0,
            }]
        );
    }

    #[test]
    fn monthly_totals_are_ordered_chronologically() {
        let conn = get_test_connection();
        insert(date!(2024 - 02 - 01), 1.0, "Food", &conn);
        insert(date!(2023 - 12 - 31), 2.0, "Food", &conn);
        insert(date!(2024 - 01 - 15), 3.0, "Food", &conn);

        let by_month = monthly_totals(&conn).expect("Could not sum by month");

        let months: Vec<&str> = by_month.iter().map(|row| row.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn category_totals_are_ordered_by_descending_total() {
        let conn = get_test_connection();
        insert(date!(2024 - 01 - 01), 5.0, "Food", &conn);
        insert(date!(2024 - 01 - 02), 30.0, "Rent", &conn);
        insert(date!(2024 - 01 - 03), 10.0, "Food", &conn);

        let by_category = category_totals(&conn).expect("Could not sum by category");

        assert_eq!(
            by_category,
            vec![
                CategoryTotal {
                    category: CategoryName::new_unchecked("Rent"),
                    total: 30.0,
                },
                CategoryTotal {
                    category: CategoryName::new_unchecked("Food"),
                    total: 15.0,
                },
            ]
        );
    }

    #[test]
    fn categories_with_equal_totals_are_ordered_alphabetically() {
        let conn = get_test_connection();
        insert(date!(2024 - 01 - 01), 5.0, "Transport", &conn);
        insert(date!(2024 - 01 - 02), 5.0, "Food", &conn);

        let by_category = category_totals(&conn).expect("Could not sum by category");

        let categories: Vec<&str> = by_category
            .iter()
            .map(|row| row.category.as_ref())
            .collect();
        assert_eq!(categories, vec!["Food", "Transport"]);
    }

    #[test]
    fn totals_are_rounded_to_two_decimal_places() {
        let conn = get_test_connection();
        insert(date!(2024 - 01 - 01), 3.333, "Food", &conn);
        insert(date!(2024 - 01 - 02), 3.333, "Food", &conn);

        let by_month = monthly_totals(&conn).expect("Could not sum by month");

        assert_eq!(by_month[0].total, 6.67);
    }

    #[test]
    fn negative_amounts_reduce_totals() {
        let conn = get_test_connection();
        insert(date!(2024 - 01 - 01), 10.0, "Food", &conn);
        insert(date!(2024 - 01 - 02), -2.5, "Food", &conn);

        let by_category = category_totals(&conn).expect("Could not sum by category");

        assert_eq!(by_category[0].total, 7.5);
    }
}
