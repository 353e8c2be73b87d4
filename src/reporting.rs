use crate::month::MonthKey;

/// Spending for a month judged against that month's budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// No budget has been set for the month
    Unset,
    /// Spending is at or under budget; carries the amount left
    WithinBudget(f64),
    /// Spending is over budget; carries the overage
    Exceeded(f64),
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, BudgetStatus::Exceeded(_))
    }
}

/// Spending exactly equal to the budget counts as within budget.
pub fn evaluate(total_expense: f64, budget: Option<f64>) -> BudgetStatus {
    match budget {
        None => BudgetStatus::Unset,
        Some(budget_amount) => {
            let remaining = budget_amount - total_expense;
            if remaining >= 0.0 {
                BudgetStatus::WithinBudget(remaining)
            } else {
                BudgetStatus::Exceeded(-remaining)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub total: f64,
    pub budget: Option<f64>,
    pub status: BudgetStatus,
}

impl MonthlySummary {
    pub fn new(month: MonthKey, total: f64, budget: Option<f64>) -> Self {
        Self {
            month,
            total,
            budget,
            status: evaluate(total, budget),
        }
    }
}
