use crate::errors::StoreResult;
use crate::month::MonthKey;
use diesel::prelude::*;
use diesel::sql_types::{Double, Text};
use diesel::sqlite::SqliteConnection;
use std::collections::BTreeMap;

// Stored dates are YYYY-MM-DD, so the first seven characters are the month key.
const MONTH_TOTAL_QUERY: &str = r"
select coalesce(sum(amount), 0.0) as total
from expenses
where substr(date, 1, 7) = ?;
";

const MONTH_CATEGORY_TOTALS_QUERY: &str = r"
select category, sum(amount) as total
from expenses
where substr(date, 1, 7) = ?
group by category
order by category;
";

#[derive(QueryableByName)]
pub struct MonthTotal {
    #[diesel(sql_type = Double)]
    pub total: f64,
}

#[derive(QueryableByName)]
pub struct CategoryTotal {
    #[diesel(sql_type = Text)]
    pub category: String,
    #[diesel(sql_type = Double)]
    pub total: f64,
}

pub fn get_month_total(conn: &mut SqliteConnection, month: &MonthKey) -> StoreResult<f64> {
    let res = diesel::sql_query(MONTH_TOTAL_QUERY)
        .bind::<Text, _>(month.as_key())
        .get_result::<MonthTotal>(conn)?;

    Ok(res.total)
}

/// Categories without expenses in `month` are absent rather than zero
pub fn get_month_category_totals(
    conn: &mut SqliteConnection,
    month: &MonthKey,
) -> StoreResult<BTreeMap<String, f64>> {
    let rows = diesel::sql_query(MONTH_CATEGORY_TOTALS_QUERY)
        .bind::<Text, _>(month.as_key())
        .load::<CategoryTotal>(conn)?;

    Ok(rows.into_iter().map(|r| (r.category, r.total)).collect())
}
