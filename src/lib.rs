// Public library interface for expense-tracker
pub mod budget;
pub mod cli_helper;
pub mod cli_utils;
pub mod errors;
pub mod expenses;
pub mod month;
pub mod reporting;
pub mod schema;
pub mod store;
pub mod utils;

pub use errors::{StoreError, StoreResult};
pub use reporting::{BudgetStatus, MonthlySummary, evaluate};
pub use store::{Store, StoreConfig};
