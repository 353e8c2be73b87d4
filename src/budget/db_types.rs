use crate::month::MonthKey;
use crate::schema::budget as BudgetTable;
use diesel::prelude::*;

/// At most one row exists per month key
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = BudgetTable)]
#[diesel(primary_key(month))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetRecord {
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = BudgetTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UpsertBudget {
    pub month: String,
    pub amount: f64,
}

impl UpsertBudget {
    pub fn new(month: &MonthKey, amount: f64) -> Self {
        Self {
            month: month.as_key(),
            amount,
        }
    }
}
