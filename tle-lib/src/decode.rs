//! Decoders for the numeric micro-formats of the TLE element lines.
//!
//! Each decoder takes the raw column text of a single field and produces its value, or a
//! [DecodeError] without any position information. Locating the failure within a record
//! is the responsibility of the caller.

/// Century boundary used when expanding two digit years.
const CENTURY: i32 = 100;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The text does not match the decoder's format.
    #[error("cannot decode {0:?}")]
    Format(String),
    /// Epoch day text without a `.` separating the fractional day.
    #[error("epoch day {0:?} has no fractional part")]
    MissingFraction(String),
}

fn format_err(s: &str) -> DecodeError {
    DecodeError::Format(s.to_string())
}

/// Plain signed integer.
///
/// # Errors
/// [DecodeError::Format] if `s` is not a base 10 integer.
pub fn integer(s: &str) -> Result<i64, DecodeError> {
    s.parse::<i64>().map_err(|_| format_err(s))
}

/// Plain decimal. Surrounding whitespace is ignored so fixed width columns can be decoded
/// as-is, e.g., `" 83.7323"`.
///
/// # Errors
/// [DecodeError::Format] if `s` is not a finite decimal number.
pub fn decimal(s: &str) -> Result<f64, DecodeError> {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format_err(s)),
    }
}

fn two_digits(s: &str) -> Result<i32, DecodeError> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_err(s));
    }
    s.parse::<i32>().map_err(|_| format_err(s))
}

/// Expand a two digit launch year using `current_year` as the pivot.
///
/// Years greater than the two digit current year are taken to be in the 1900s, all others
/// in the 2000s. With a current year of 2017, `"98"` is 1998 and `"11"` is 2011.
///
/// # Errors
/// [DecodeError::Format] if `s` is not exactly two digits.
pub fn launch_year(s: &str, current_year: i32) -> Result<i32, DecodeError> {
    let yy = two_digits(s)?;
    if yy > current_year.rem_euclid(CENTURY) {
        Ok(1900 + yy)
    } else {
        Ok(2000 + yy)
    }
}

/// Expand a two digit epoch year. Epoch years are always in the 2000s.
///
/// # Errors
/// [DecodeError::Format] if `s` is not exactly two digits.
pub fn epoch_year(s: &str) -> Result<i32, DecodeError> {
    Ok(2000 + two_digits(s)?)
}

/// Day of year from the fractional epoch day, e.g., `"126.54791667"` is day 126.
///
/// The fractional part is discarded.
///
/// # Errors
/// [DecodeError::MissingFraction] if there is no `.` in `s`, or [DecodeError::Format] if the
/// whole day part is not a non-negative integer.
pub fn epoch_day(s: &str) -> Result<u32, DecodeError> {
    let Some((day, _)) = s.split_once('.') else {
        return Err(DecodeError::MissingFraction(s.to_string()));
    };
    day.parse::<u32>().map_err(|_| format_err(s))
}

/// Decimal where a `-` stands in for the decimal point, as used by the second derivative of
/// mean motion and BSTAR drag fields.
///
/// A leading `-` is a sign and is kept; the next `-` after it is the decimal point. Without a
/// leading sign every `-` becomes a `.`. No exponent scaling is applied, so `"49495-4"` is
/// `49495.4` and `"-11606-4"` is `-11606.4`.
///
/// # Errors
/// [DecodeError::Format] if the substituted text is not a decimal.
pub fn hyphenated_decimal(s: &str) -> Result<f64, DecodeError> {
    if s.is_empty() {
        return Err(format_err(s));
    }
    let formatted = match s.strip_prefix('-') {
        Some(rest) => format!("-{}", rest.replacen('-', ".", 1)),
        None => s.replace('-', "."),
    };
    decimal(&formatted).map_err(|_| format_err(s))
}

/// Eccentricity digits with an implied leading `0.`, e.g., `"0005666"` is `0.0005666`.
///
/// # Errors
/// [DecodeError::Format] if `s` is empty or contains anything other than ASCII digits.
pub fn eccentricity(s: &str) -> Result<f64, DecodeError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_err(s));
    }
    decimal(&format!("0.{s}")).map_err(|_| format_err(s))
}

/// Launch piece as the sum of its letter values, where `A` is 1 through `Z` is 26.
///
/// Characters are valued relative to `@`, so anything that is not an uppercase letter
/// produces a value outside 1..=26 and is left for validation to reject.
///
/// # Errors
/// [DecodeError::Format] if `s` is empty or longer than 3 characters.
pub fn launch_piece(s: &str) -> Result<i64, DecodeError> {
    if s.is_empty() || s.chars().count() > 3 {
        return Err(format_err(s));
    }
    Ok(s.chars().map(|c| i64::from(u32::from(c)) - i64::from(u32::from('@'))).sum())
}
