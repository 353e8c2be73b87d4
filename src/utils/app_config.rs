use crate::store::{DEFAULT_DB_PATH, StoreConfig};
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "expense-tracker",
    about = "Personal expense tracker with monthly budgets",
    long_about = "Records dated expenses, keeps a budget per calendar month and reports spending against it"
)]
pub struct AppConfig {
    /// SQLite file holding expenses and budgets
    #[arg(long, env = "EXPENSE_TRACKER_DB", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}

impl AppConfig {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Read `.env` if one is present, then the command line and environment
    pub fn from_env() -> Self {
        let _ = dotenv();
        Self::parse()
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.db_path.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_DB_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, PathBuf::from("student_expenses.db"));
        assert_eq!(config.store_config().db_path, config.db_path);
    }

    #[test]
    fn test_db_path_flag() {
        let config = AppConfig::try_parse_from(["expense-tracker", "--db-path", "/tmp/spend.db"]).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/spend.db"));
    }
}
