pub mod config;
pub mod constraints;
pub mod plan;

use chrono::{Local, NaiveDate};
use daybrief_core::Config;
use std::path::Path;

/// Load the config file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

/// Parse `YYYY-MM-DD`, defaulting to today.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}': {e}").into()),
        None => Ok(Local::now().date_naive()),
    }
}
