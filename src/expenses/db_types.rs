use crate::errors::StoreResult;
use crate::month::{format_date, parse_date};
use crate::schema::expenses as ExpensesTable;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;

/// A stored expense. `date` is always `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
}

impl ExpenseRecord {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CreateExpense {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
}

#[derive(QueryableByName)]
struct LastInsertId {
    #[diesel(sql_type = BigInt)]
    id: i64,
}

impl CreateExpense {
    /// Amount sign is checked by whoever collects the input, not here.
    /// An empty note is stored as absent.
    pub fn new(date: NaiveDate, category: &str, amount: f64, note: Option<&str>) -> Self {
        Self {
            date: format_date(date),
            category: category.to_string(),
            amount,
            note: note.filter(|n| !n.is_empty()).map(str::to_string),
        }
    }

    /// Insert the row and return the id SQLite assigned to it
    pub fn insert(&self, conn: &mut SqliteConnection) -> StoreResult<i64> {
        let id = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(ExpensesTable::table)
                .values(self)
                .execute(conn)?;

            let row = diesel::sql_query("SELECT last_insert_rowid() AS id")
                .get_result::<LastInsertId>(conn)?;
            Ok(row.id)
        })?;

        Ok(id)
    }
}
