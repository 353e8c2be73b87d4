use crate::reporting::BudgetStatus;
use colored::Colorize;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths = column_widths(&headers, &rows);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.chars().count()));

    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let mut width = header.chars().count();
            for row in rows {
                if let Some(cell) = row.get(i) {
                    width = width.max(cell.chars().count());
                }
            }
            width
        })
        .collect()
}

/// Format a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.chars().count()));
}

/// Amount with two decimals, no currency
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_money(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, value)
}

/// One-line verdict for a month's budget status
pub fn format_budget_status(status: &BudgetStatus) -> String {
    match status {
        BudgetStatus::Unset => "No budget set for this month.".yellow().to_string(),
        BudgetStatus::WithinBudget(remaining) => {
            format!("You are within budget. Remaining: {}", format_money(*remaining))
                .green()
                .to_string()
        }
        BudgetStatus::Exceeded(overage) => {
            format!("Budget exceeded by: {}", format_money(*overage))
                .red()
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds_to_cents() {
        assert_eq!(format_amount(150.0), "150.00");
        assert_eq!(format_amount(12.3456), "12.35");
        assert_eq!(format_money(850.5), "₹850.50");
    }

    #[test]
    fn test_column_widths_fit_longest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Shopping".to_string()],
            vec!["12".to_string(), "Food".to_string()],
        ];
        assert_eq!(column_widths(&["ID", "Category"], &rows), vec![2, 8]);
    }

    #[test]
    fn test_budget_status_messages() {
        colored::control::set_override(false);
        assert_eq!(
            format_budget_status(&BudgetStatus::WithinBudget(20.0)),
            "You are within budget. Remaining: ₹20.00"
        );
        assert_eq!(
            format_budget_status(&BudgetStatus::Exceeded(20.0)),
            "Budget exceeded by: ₹20.00"
        );
        assert_eq!(
            format_budget_status(&BudgetStatus::Unset),
            "No budget set for this month."
        );
    }
}
