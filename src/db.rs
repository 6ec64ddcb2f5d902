//! Opening and preparing the application's SQLite database.

use std::path::Path;

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, expense::create_expense_table};

/// Open the SQLite database at `path` and ensure the schema exists.
///
/// The database file is created if it does not exist. The returned connection
/// is intended to be held for the lifetime of the process.
///
/// # Errors
/// This function will return an [Error] if the file cannot be opened or the
/// schema cannot be created.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection, Error> {
    let connection = Connection::open(path)?;
    initialize(&connection)?;

    Ok(connection)
}

/// Create the application tables on `connection` if they do not exist.
///
/// # Errors
/// This function will return an [Error] if the schema cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
