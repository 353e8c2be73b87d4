// Shared helpers for the interactive shell
pub mod menu;
pub mod input;
pub mod formatting;

pub use menu::MenuChoice;
pub use input::Input;
pub use formatting::{format_table, format_record};

use crate::errors::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug)]
pub enum CliError {
    DatabaseError(String),
    ValidationError(String),
    NotFound(String),
    UserCancelled,
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            CliError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CliError::UserCancelled => write!(f, "Operation cancelled by user"),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        if err.is_locked() {
            CliError::DatabaseError(format!("{} (is another process using the file?)", err))
        } else {
            CliError::DatabaseError(err.to_string())
        }
    }
}

/// Confirm a dangerous operation
pub fn confirm(message: &str) -> CliResult<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?)
}

/// Print a success message
pub fn print_success(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✓ {}", message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("ℹ {}", message).bright_cyan());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("⚠ {}", message).yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✗ {}", message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_maps_to_database_error() {
        let err: CliError = StoreError::MigrationFailed("bad sql".to_string()).into();
        assert!(matches!(err, CliError::DatabaseError(_)));
        assert_eq!(err.to_string(), "Database error: Migration failed: bad sql");
    }

    #[test]
    fn test_validation_error_display() {
        let err = CliError::ValidationError("Amount cannot be negative".to_string());
        assert_eq!(err.to_string(), "Validation error: Amount cannot be negative");
    }
}
