//! Expense management for the interactive tracker.

mod add;
mod db;
mod domain;
mod edit;
mod summary;
mod view;

pub use add::add_expense;
pub use db::{
    CategoryTotal, ExpenseQuery, MonthlyTotal, category_totals, create_expense,
    create_expense_table, delete_expense, get_expense, monthly_totals, query_expenses,
    update_expense,
};
pub use domain::{CategoryName, Expense, ExpenseId, format_date, parse_amount, parse_date};
pub use edit::edit_or_delete_expense;
pub use summary::print_summary;
pub use view::view_expenses;

#[cfg(test)]
pub use db::count_expenses;
