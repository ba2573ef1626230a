//! Display formatting for on-chain integer amounts.
//!
//! Balances and deltas arrive as decimal-string integers in base units and
//! stay integers through the whole pipeline. Formatting splits the digit
//! string at the decimal position instead of dividing, so a value far beyond
//! f64's exactly-representable range still renders without precision loss,
//! and no power of ten is ever materialized.

use thiserror::Error;

/// Errors produced when parsing numeric wire strings or display strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a valid integer string: '{0}'")]
    InvalidInteger(String),
}

/// Parse a signed decimal-string integer as received on the wire.
pub fn parse_units(text: &str) -> Result<i128, FormatError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i128>()
        .map_err(|_| FormatError::InvalidInteger(trimmed.to_string()))
}

/// Parse an unsigned decimal-string integer as received on the wire.
pub fn parse_unsigned_units(text: &str) -> Result<u128, FormatError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u128>()
        .map_err(|_| FormatError::InvalidInteger(trimmed.to_string()))
}

/// Format base units into a display string.
///
/// `decimals` gives the power of ten separating base units from display
/// units. Trailing fractional zeros are trimmed and an all-zero fraction
/// drops the decimal point entirely. With `signed`, negative values get a
/// `-` prefix; zero never carries a sign.
pub fn format_units(raw: i128, decimals: u8, signed: bool) -> String {
    let body = split_digits(&raw.unsigned_abs().to_string(), decimals);
    if signed && raw < 0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Format an unsigned balance into a display string.
pub fn format_unsigned(raw: u128, decimals: u8) -> String {
    split_digits(&raw.to_string(), decimals)
}

/// Format a signed delta into a display string, keeping the sign.
pub fn format_signed(raw: i128, decimals: u8) -> String {
    format_units(raw, decimals, true)
}

/// Parse a display string produced by [`format_units`] back into base units.
pub fn parse_display(text: &str, decimals: u8) -> Result<i128, FormatError> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    if int_part.is_empty()
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
        || frac_part.len() > decimals as usize
    {
        return Err(FormatError::InvalidInteger(trimmed.to_string()));
    }

    // Right-pad the fraction to the full decimal width, then read the
    // concatenated digits as a single integer.
    let mut digits = String::with_capacity(int_part.len() + decimals as usize);
    digits.push_str(int_part);
    digits.push_str(frac_part);
    for _ in frac_part.len()..decimals as usize {
        digits.push('0');
    }

    let magnitude = digits
        .parse::<i128>()
        .map_err(|_| FormatError::InvalidInteger(trimmed.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Split an unsigned digit string at `decimals` places from the right.
fn split_digits(digits: &str, decimals: u8) -> String {
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits.to_string();
    }

    let padded;
    let digits = if digits.len() <= decimals {
        padded = format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits);
        padded.as_str()
    } else {
        digits
    };

    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}
