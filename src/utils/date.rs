use anyhow::anyhow;
use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// Wire format for birth dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date from a request body. Anything else rejects
/// the request before any state is touched.
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| AppError::bad_request(anyhow!("Invalid date format. Use YYYY-MM-DD")))
}
