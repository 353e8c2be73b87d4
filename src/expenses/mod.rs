pub mod db_types;
pub mod operations;
pub mod sql_queries;

pub use db_types::{CreateExpense, ExpenseRecord};
