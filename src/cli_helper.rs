use crate::cli_utils::{CliError, CliResult};
use crate::store::Store;
use crate::utils::app_config::AppConfig;
use colored::Colorize;
use std::io::{self, Write};

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config() -> AppConfig {
    AppConfig::from_env()
}

/// Build the store for `app_config` and make sure its schema exists
pub fn open_store(app_config: &AppConfig) -> anyhow::Result<Store> {
    let store = Store::new(app_config.store_config());
    store.init()?;
    Ok(store)
}

/// Prompt user to retry a failed operation
pub fn prompt_retry() -> CliResult<bool> {
    loop {
        print!("Operation failed. Retry? (y/n): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(false);
        }

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                println!("Please enter 'y' or 'n'");
                continue;
            }
        }
    }
}

/// Execute a storage operation, offering a retry when it fails.
/// Only database errors are retried; anything else is returned immediately.
pub fn execute_with_retry<F, T>(mut operation: F, op_name: &str) -> CliResult<T>
where
    F: FnMut() -> CliResult<T>,
{
    loop {
        match operation() {
            Ok(result) => return Ok(result),
            Err(e @ CliError::DatabaseError(_)) => {
                tracing::error!(operation = op_name, error = %e, "storage operation failed");
                eprintln!("\n{}: {}\n", "Error".red(), e);

                if !prompt_retry()? {
                    return Err(e);
                }
            }
            Err(e) => return Err(e),
        }
    }
}
