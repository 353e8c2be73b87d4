pub mod db_types;
pub mod operations;

pub use db_types::{BudgetRecord, UpsertBudget};
