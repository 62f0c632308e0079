use crate::error::{FacultyError, Result};
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/mm/yyyy` date of birth. Surrounding whitespace is ignored.
pub fn parse_date_of_birth(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| FacultyError::InvalidDate(trimmed.to_string()))
}

/// Whole years between `date_of_birth` and `as_of`.
///
/// The year difference is reduced by one while the anniversary has not yet come
/// round in `as_of`'s year. Dates of birth after `as_of` yield 0.
pub fn compute_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
