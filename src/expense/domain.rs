//! Core expense domain types and field parsing.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The date encoding used in the database and the console, e.g. "2024-01-15".
const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategory] if `name` is empty
    /// or whitespace-only.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategory)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty. This is intended
    /// for values that were already validated, such as rows read back from the
    /// database.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// A single expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The expense's database identifier. Assigned by the database, never
    /// reused after a delete.
    pub id: ExpenseId,
    /// The calendar date the expense occurred on.
    pub date: Date,
    /// The amount spent. Negative amounts record refunds.
    pub amount: f64,
    /// The label used to group expenses in the summary report.
    pub category: CategoryName,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Parse user input as a calendar date in YYYY-MM-DD format.
///
/// # Errors
///
/// Returns an [Error::InvalidDate] carrying the offending input if it does not
/// match the format or names an impossible date.
pub fn parse_date(input: &str) -> Result<Date, Error> {
    let input = input.trim();

    Date::parse(input, DATE_FORMAT).map_err(|_| Error::InvalidDate(input.to_string()))
}

/// Format a date as YYYY-MM-DD for the console and confirmation messages.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse user input as an expense amount.
///
/// Accepts anything that parses as an `f64` except NaN and infinities, which
/// would poison the SUM aggregates in the summary queries.
///
/// # Errors
///
/// Returns an [Error::InvalidAmount] carrying the offending input.
pub fn parse_amount(input: &str) -> Result<f64, Error> {
    let input = input.trim();

    input
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::InvalidAmount(input.to_string()))
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, expense::domain::CategoryName};

    #[test]
    fn new_trims_whitespace() {
        let name = CategoryName::new("  Food  ").expect("Could not create category name");

        assert_eq!(name.as_ref(), "Food");
    }

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(CategoryName::new(""), Err(Error::EmptyCategory));
    }

    #[test]
    fn new_fails_on_whitespace_only_string() {
        assert_eq!(CategoryName::new("   \t"), Err(Error::EmptyCategory));
    }
}
