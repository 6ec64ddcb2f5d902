//! Spendlog is a pair of small command line utilities: an interactive expense
//! tracker backed by SQLite, and a word-frequency counter for text files.
//!
//! This library holds the logic for both programs so that every operation can
//! be tested without a terminal attached. The binaries in `src/bin` are thin
//! wrappers that parse arguments and wire up stdin/stdout.

#![warn(missing_docs)]

use std::io;

mod console;
mod db;
mod expense;
mod format;
mod menu;
mod wordfreq;

pub use db::{initialize as initialize_db, open as open_db};
pub use menu::run_menu;
pub use wordfreq::{TOP_TOKEN_LIMIT, TokenCount, count_tokens, top_tokens};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used to create a category name.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// A string could not be parsed as a calendar date.
    ///
    /// Carries the input that caused the error so it can be echoed back to the
    /// user in the warning message.
    #[error("\"{0}\" is not a valid date, enter a date like 2024-01-15")]
    InvalidDate(String),

    /// A string could not be parsed as a finite amount.
    #[error("\"{0}\" is not a valid amount, enter a number like 12.50")]
    InvalidAmount(String),

    /// The requested expense was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested expense could not be found")]
    NotFound,

    /// Tried to update an expense that does not exist
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// Tried to delete an expense that does not exist
    #[error("tried to delete an expense that is not in the database")]
    DeleteMissingExpense,

    /// A read from or write to the console failed.
    ///
    /// The underlying `io::Error` is kept as its message string so that this
    /// enum stays comparable in tests.
    #[error("console read/write failed: {0}")]
    ConsoleIo(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::ConsoleIo(value.to_string())
    }
}
