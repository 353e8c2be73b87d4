use crate::budget::db_types::{BudgetRecord, UpsertBudget};
use crate::errors::StoreResult;
use crate::month::MonthKey;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel::upsert::excluded;

/// Insert the month's budget, or replace the amount if the month already has one
pub fn upsert_budget(conn: &mut SqliteConnection, input: &UpsertBudget) -> StoreResult<()> {
    use crate::schema::budget::dsl::*;

    diesel::insert_into(budget)
        .values(input)
        .on_conflict(month)
        .do_update()
        .set(amount.eq(excluded(amount)))
        .execute(conn)?;

    Ok(())
}

pub fn get_budget(conn: &mut SqliteConnection, key: &MonthKey) -> StoreResult<Option<f64>> {
    use crate::schema::budget::dsl::*;

    let res = budget
        .find(key.as_key())
        .select(amount)
        .first::<f64>(conn)
        .optional()?;

    Ok(res)
}

pub fn list_budgets(conn: &mut SqliteConnection) -> StoreResult<Vec<BudgetRecord>> {
    use crate::schema::budget::dsl::*;

    let rows = budget
        .order(month.asc())
        .select(BudgetRecord::as_select())
        .load::<BudgetRecord>(conn)?;

    Ok(rows)
}
