//! Durable expense and budget storage.
//!
//! `Store` owns no open handle. Each call opens a connection to the configured
//! SQLite file, runs its statement(s) and drops the connection before
//! returning, so isolation between processes is left to SQLite's file locking.

use crate::budget::db_types::{BudgetRecord, UpsertBudget};
use crate::budget::operations as budget_ops;
use crate::errors::StoreResult;
use crate::expenses::db_types::{CreateExpense, ExpenseRecord};
use crate::expenses::{operations as expense_ops, sql_queries};
use crate::month::MonthKey;
use crate::utils::db;
use chrono::NaiveDate;
use diesel::sqlite::SqliteConnection;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "student_expenses.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create the backing file and both relations if they are missing.
    /// Safe to call on every start.
    pub fn init(&self) -> StoreResult<()> {
        tracing::info!("Initializing store at {}", self.config.db_path.display());
        db::ensure_parent_dir(&self.config.db_path)?;
        self.with_conn(db::run_migrations)
    }

    pub fn add_expense(
        &self,
        date: NaiveDate,
        category: &str,
        amount: f64,
        note: Option<&str>,
    ) -> StoreResult<i64> {
        let input = CreateExpense::new(date, category, amount, note);
        let id = self.with_conn(|conn| expense_ops::create_expense(conn, &input))?;
        tracing::debug!(id, date = %input.date, category, amount, "expense added");

        Ok(id)
    }

    /// Number of rows removed; 0 means no expense had that id
    pub fn delete_expense(&self, id: i64) -> StoreResult<usize> {
        let deleted = self.with_conn(|conn| expense_ops::delete_expense(conn, id))?;
        if deleted == 0 {
            tracing::warn!(id, "delete matched no expense");
        } else {
            tracing::debug!(id, "expense deleted");
        }

        Ok(deleted)
    }

    pub fn get_expense(&self, id: i64) -> StoreResult<Option<ExpenseRecord>> {
        self.with_conn(|conn| expense_ops::get_expense(conn, id))
    }

    pub fn list_expenses(&self) -> StoreResult<Vec<ExpenseRecord>> {
        let rows = self.with_conn(expense_ops::list_expenses)?;
        tracing::debug!(count = rows.len(), "listed expenses");

        Ok(rows)
    }

    /// 0.0 when the month has no expenses
    pub fn sum_expenses_for_month(&self, month: &MonthKey) -> StoreResult<f64> {
        let total = self.with_conn(|conn| sql_queries::get_month_total(conn, month))?;
        tracing::debug!(month = %month, total, "summed month");

        Ok(total)
    }

    pub fn sum_by_category_for_month(&self, month: &MonthKey) -> StoreResult<BTreeMap<String, f64>> {
        let totals = self.with_conn(|conn| sql_queries::get_month_category_totals(conn, month))?;
        tracing::debug!(month = %month, categories = totals.len(), "summed month by category");

        Ok(totals)
    }

    pub fn upsert_budget(&self, month: &MonthKey, amount: f64) -> StoreResult<()> {
        let input = UpsertBudget::new(month, amount);
        self.with_conn(|conn| budget_ops::upsert_budget(conn, &input))?;
        tracing::debug!(month = %month, amount, "budget set");

        Ok(())
    }

    pub fn get_budget(&self, month: &MonthKey) -> StoreResult<Option<f64>> {
        self.with_conn(|conn| budget_ops::get_budget(conn, month))
    }

    pub fn list_budgets(&self) -> StoreResult<Vec<BudgetRecord>> {
        self.with_conn(budget_ops::list_budgets)
    }

    fn with_conn<T>(
        &self,
        op: impl FnOnce(&mut SqliteConnection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut conn = db::get_conn(&self.config.db_path)?;
        op(&mut conn)
    }
}
