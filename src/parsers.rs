// src/parsers.rs
use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a file count (>= 1, and small enough to carry a sign).
///
/// # Errors
/// Returns an error if the input is not a number, is zero, or is too large.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let max = usize::try_from(i64::MAX).unwrap_or(usize::MAX);
    parse_bounded_number(s, 1, Some(max))
}
