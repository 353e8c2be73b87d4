use crate::cli_utils::CliResult;
use colored::Colorize;
use std::io::{self, Write};

/// Main menu entries, selected by digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    SetBudget,
    MonthlySummary,
    CategorySummary,
    DeleteExpense,
    Exit,
}

impl MenuChoice {
    /// Display order; `Exit` is listed last under `0`
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::SetBudget,
        MenuChoice::MonthlySummary,
        MenuChoice::CategorySummary,
        MenuChoice::DeleteExpense,
        MenuChoice::Exit,
    ];

    pub fn digit(&self) -> char {
        match self {
            MenuChoice::AddExpense => '1',
            MenuChoice::ViewExpenses => '2',
            MenuChoice::SetBudget => '3',
            MenuChoice::MonthlySummary => '4',
            MenuChoice::CategorySummary => '5',
            MenuChoice::DeleteExpense => '6',
            MenuChoice::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::ViewExpenses => "View All Expenses",
            MenuChoice::SetBudget => "Set / Update Monthly Budget",
            MenuChoice::MonthlySummary => "View Monthly Summary",
            MenuChoice::CategorySummary => "View Category-wise Summary",
            MenuChoice::DeleteExpense => "Delete an Expense",
            MenuChoice::Exit => "Exit",
        }
    }

    /// `None` for anything but a single listed digit
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let digit = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.iter().copied().find(|c| c.digit() == digit)
    }

    /// Print the menu and read one line. `Ok(None)` means the input was not a menu digit.
    pub fn prompt(title: &str) -> CliResult<Option<Self>> {
        print_menu(title);

        print!("Enter your choice: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(Some(MenuChoice::Exit));
        }

        Ok(Self::parse(&input))
    }
}

fn print_menu(title: &str) {
    println!();
    println!("{}", "==============================".bright_cyan());
    println!("  {}", title.bold());
    println!("{}", "==============================".bright_cyan());
    for choice in MenuChoice::ALL {
        println!("{}. {}", choice.digit(), choice.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_digits() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 4\n"), Some(MenuChoice::MonthlySummary));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::DeleteExpense));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }
}
