use anyhow::Result;
use colored::Colorize;
use std::env;
use std::io::Write;

use expense_tracker::cli_helper::{execute_with_retry, initialize_app_config, open_store};
use expense_tracker::cli_utils::{
    CliError, CliResult, Input, MenuChoice, confirm,
    formatting::{format_amount, format_budget_status, format_money, format_record, format_table, print_header},
    print_error, print_info, print_success, print_warning,
};
use expense_tracker::expenses::ExpenseRecord;
use expense_tracker::month::MonthKey;
use expense_tracker::reporting::MonthlySummary;
use expense_tracker::store::Store;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let app_config = initialize_app_config();

    eprint!("Opening {}... ", app_config.db_path.display());
    std::io::stderr().flush().ok();

    let store = match open_store(&app_config) {
        Ok(store) => {
            eprintln!("{}", "✓ Ready".green());
            store
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    loop {
        match MenuChoice::prompt("Student Expense Manager") {
            Ok(Some(MenuChoice::Exit)) => {
                eprintln!("{}", "Exiting... Bye!".bright_cyan());
                break;
            }
            Ok(Some(choice)) => {
                if let Err(e) = run_choice(choice, &store) {
                    report(e);
                }
            }
            Ok(None) => print_error("Invalid choice. Please try again."),
            Err(e) => {
                eprintln!("{}", format!("Error: {}", e).red());
                break;
            }
        }
    }

    Ok(())
}

fn run_choice(choice: MenuChoice, store: &Store) -> CliResult<()> {
    match choice {
        MenuChoice::AddExpense => add_expense(store),
        MenuChoice::ViewExpenses => view_expenses(store).map(|_| ()),
        MenuChoice::SetBudget => set_monthly_budget(store),
        MenuChoice::MonthlySummary => view_month_summary(store),
        MenuChoice::CategorySummary => view_category_summary(store),
        MenuChoice::DeleteExpense => delete_expense(store),
        MenuChoice::Exit => Ok(()),
    }
}

fn report(err: CliError) {
    match err {
        CliError::UserCancelled => print_info(&err.to_string()),
        CliError::NotFound(msg) => print_warning(&msg),
        other => print_error(&other.to_string()),
    }
}

fn add_expense(store: &Store) -> CliResult<()> {
    print_header("Add New Expense");

    let date = Input::get_date_or_today("Enter date")?;
    let category = Input::get_category("Enter category")?;
    let amount = Input::get_amount("Enter amount spent")?;
    let note = Input::get_optional_string("Enter note/description")?;

    let id = execute_with_retry(
        || Ok(store.add_expense(date, &category, amount, note.as_deref())?),
        "add_expense",
    )?;

    print_success(&format!("Expense added successfully (ID {})", id));
    Ok(())
}

/// Prints every expense and returns how many there were
fn view_expenses(store: &Store) -> CliResult<usize> {
    print_header("All Expenses");

    let rows = execute_with_retry(|| Ok(store.list_expenses()?), "list_expenses")?;
    if rows.is_empty() {
        print_info("No expenses found.");
        return Ok(0);
    }

    let count = rows.len();
    format_table(
        vec!["ID", "Date", "Category", "Amount", "Note"],
        rows.into_iter().map(expense_row).collect(),
    );

    Ok(count)
}

fn expense_row(expense: ExpenseRecord) -> Vec<String> {
    vec![
        expense.id.to_string(),
        expense.date,
        expense.category,
        format_amount(expense.amount),
        expense.note.unwrap_or_default(),
    ]
}

fn set_monthly_budget(store: &Store) -> CliResult<()> {
    print_header("Set / Update Monthly Budget");

    let month = MonthKey::current();
    print_info(&format!("Current month: {} (YYYY-MM)", month));

    if let Some(existing) = execute_with_retry(|| Ok(store.get_budget(&month)?), "get_budget")? {
        print_info(&format!("Existing budget: {}", format_money(existing)));
    }

    let amount = Input::get_amount("Enter budget amount for this month")?;
    execute_with_retry(|| Ok(store.upsert_budget(&month, amount)?), "upsert_budget")?;

    print_success(&format!("Budget of {} set for month {}.", format_money(amount), month));
    Ok(())
}

fn view_month_summary(store: &Store) -> CliResult<()> {
    print_header("Monthly Summary (Current Month)");

    let month = MonthKey::current();
    let total = execute_with_retry(|| Ok(store.sum_expenses_for_month(&month)?), "sum_expenses_for_month")?;
    let budget = execute_with_retry(|| Ok(store.get_budget(&month)?), "get_budget")?;
    let summary = MonthlySummary::new(month, total, budget);

    format_record(vec![
        ("Month", summary.month.to_string()),
        ("Total expenses", format_money(summary.total)),
        ("Budget", summary.budget.map(format_money).unwrap_or_else(|| "-".to_string())),
    ]);
    println!();
    println!("{}", format_budget_status(&summary.status));

    Ok(())
}

fn view_category_summary(store: &Store) -> CliResult<()> {
    print_header("Category-wise Summary (Current Month)");

    let month = MonthKey::current();
    print_info(&format!("Month: {}", month));

    let totals = execute_with_retry(
        || Ok(store.sum_by_category_for_month(&month)?),
        "sum_by_category_for_month",
    )?;
    if totals.is_empty() {
        print_info("No expenses found for this month.");
        return Ok(());
    }

    format_table(
        vec!["Category", "Total Spent"],
        totals
            .into_iter()
            .map(|(category, total)| vec![category, format_amount(total)])
            .collect(),
    );

    Ok(())
}

fn delete_expense(store: &Store) -> CliResult<()> {
    if view_expenses(store)? == 0 {
        return Ok(());
    }

    print_header("Delete Expense");
    let id = Input::get_i64("Enter the ID of the expense to delete")?;

    let expense = execute_with_retry(|| Ok(store.get_expense(id)?), "get_expense")?
        .ok_or_else(|| CliError::NotFound("No expense found with that ID.".to_string()))?;

    format_record(vec![
        ("Date", expense.date.clone()),
        ("Category", expense.category.clone()),
        ("Amount", format_amount(expense.amount)),
    ]);
    if !confirm("Delete this expense?")? {
        return Err(CliError::UserCancelled);
    }

    let deleted = execute_with_retry(|| Ok(store.delete_expense(id)?), "delete_expense")?;
    if deleted == 0 {
        print_warning("No expense found with that ID.");
    } else {
        print_success("Expense deleted successfully.");
    }

    Ok(())
}
