use crate::cli_utils::{CliError, CliResult};
use crate::month::parse_date;
use chrono::{Local, NaiveDate};
use dialoguer::Input as DialoguerInput;

/// Categories offered in the prompt. Any other text is accepted as-is.
pub const SUGGESTED_CATEGORIES: [&str; 5] = ["Food", "Travel", "Shopping", "Fees", "Other"];

/// Input utilities
pub struct Input;

impl Input {
    /// Get a non-empty string from user input
    pub fn get_string(prompt: &str) -> CliResult<String> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;
        Ok(input.trim().to_string())
    }

    /// Get an optional string
    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        Ok(if input.is_empty() { None } else { Some(input.to_string()) })
    }

    /// Get an integer
    pub fn get_i64(prompt: &str) -> CliResult<i64> {
        let input: String = DialoguerInput::new().with_prompt(prompt).interact_text()?;

        input
            .trim()
            .parse::<i64>()
            .map_err(|_| CliError::ValidationError("Invalid ID".to_string()))
    }

    /// Get a non-negative amount, asking again until the input is valid
    pub fn get_amount(prompt: &str) -> CliResult<f64> {
        let input: String = DialoguerInput::new()
            .with_prompt(prompt)
            .validate_with(|s: &String| parse_amount(s).map(|_| ()))
            .interact_text()?;

        parse_amount(&input).map_err(CliError::ValidationError)
    }

    /// Get a `YYYY-MM-DD` date; an empty answer means today
    pub fn get_date_or_today(prompt: &str) -> CliResult<NaiveDate> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (YYYY-MM-DD) [Enter for today]", prompt))
            .allow_empty(true)
            .interact_text()?;

        parse_date_or_today(&input, Local::now().date_naive())
    }

    /// Free-text category, with the usual ones listed in the prompt
    pub fn get_category(prompt: &str) -> CliResult<String> {
        let prompt = format!("{} ({})", prompt, SUGGESTED_CATEGORIES.join("/"));
        Self::get_string(&prompt)
    }
}

pub fn parse_amount(input: &str) -> Result<f64, String> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid input. Please enter a numeric value.".to_string())?;

    if !value.is_finite() {
        return Err("Invalid input. Please enter a numeric value.".to_string());
    }
    if value < 0.0 {
        return Err("Amount cannot be negative. Try again.".to_string());
    }
    Ok(value)
}

pub fn parse_date_or_today(input: &str, today: NaiveDate) -> CliResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    parse_date(input).ok_or_else(|| {
        CliError::ValidationError(format!("'{}' is not a date of the form YYYY-MM-DD", input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_non_negative_numbers() {
        assert_eq!(parse_amount("150"), Ok(150.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        let err = parse_amount("-3").unwrap_err();
        assert!(err.contains("negative"));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_blank_date_means_today() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        assert_eq!(parse_date_or_today("", today).unwrap(), today);
        assert_eq!(parse_date_or_today("   ", today).unwrap(), today);
    }

    #[test]
    fn test_explicit_date() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        assert_eq!(
            parse_date_or_today("2025-11-30", today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()
        );
        assert!(matches!(
            parse_date_or_today("30/11/2025", today),
            Err(CliError::ValidationError(_))
        ));
    }
}
