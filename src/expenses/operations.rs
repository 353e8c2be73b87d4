use crate::errors::StoreResult;
use crate::expenses::db_types::{CreateExpense, ExpenseRecord};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

pub fn create_expense(conn: &mut SqliteConnection, input: &CreateExpense) -> StoreResult<i64> {
    input.insert(conn)
}

/// Returns how many rows were removed: 0 when `expense_id` did not exist
pub fn delete_expense(conn: &mut SqliteConnection, expense_id: i64) -> StoreResult<usize> {
    use crate::schema::expenses::dsl::*;

    let deleted = diesel::delete(expenses.filter(id.eq(expense_id))).execute(conn)?;
    Ok(deleted)
}

/// All expenses, oldest date first. Same-day rows come back in insertion order.
pub fn list_expenses(conn: &mut SqliteConnection) -> StoreResult<Vec<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let rows = expenses
        .order(date.asc())
        .then_order_by(id.asc())
        .select(ExpenseRecord::as_select())
        .load::<ExpenseRecord>(conn)?;

    Ok(rows)
}

pub fn get_expense(conn: &mut SqliteConnection, expense_id: i64) -> StoreResult<Option<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let row = expenses
        .find(expense_id)
        .select(ExpenseRecord::as_select())
        .first::<ExpenseRecord>(conn)
        .optional()?;

    Ok(row)
}
