//! `DD/MM/YYYY` to `YYYYMMDD` conversion.

use chrono::NaiveDate;

use super::Result;
use crate::error::ExtractionError;

/// Reformat a `DD/MM/YYYY` token as `YYYYMMDD`.
///
/// Day and month may have one or two digits, the year must have four. The
/// result is a real calendar date, zero-padded.
pub fn reformat_date(token: &str) -> Result<String> {
    let malformed = || ExtractionError::MalformedDate {
        value: token.to_string(),
    };

    let parts: Vec<&str> = token.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(malformed());
    };

    if !is_digits(day, 1..=2) || !is_digits(month, 1..=2) || !is_digits(year, 4..=4) {
        return Err(malformed());
    }

    let day: u32 = day.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;
    Ok(date.format("%Y%m%d").to_string())
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
