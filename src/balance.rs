//! Provides a safe, self-contained type for representing wallet balances.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Number of fractional digits every balance is displayed with.
pub const DECIMALS: u32 = 2;

const MINOR_PER_MAJOR: u64 = 10_u64.pow(DECIMALS);

/// An error that can occur when parsing a string into a `Balance`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseBalanceError {
    /// The input is not a plain decimal number (e.g., "abc", "1.2.3", "").
    #[error("invalid balance format")]
    InvalidFormat,
    /// The input has more fractional digits than a balance can hold (e.g., "1.234").
    #[error("too many decimal places for a balance")]
    TooManyDecimals,
    /// The input is below zero.
    #[error("balance cannot be negative")]
    Negative,
}

/// A non-negative balance with two fractional digits.
///
/// Internally the quantity is an unsigned count of hundredths, so negative
/// balances cannot be represented and formatting never touches floats.
/// `Display` always prints exactly two fractional digits, e.g. `0.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "String")]
pub struct Balance {
    minor: u64,
}

impl Balance {
    pub const ZERO: Self = Self { minor: 0 };

    /// Returns the raw amount in hundredths.
    pub fn as_minor_units(&self) -> u64 {
        self.minor
    }

    /// Creates a `Balance` directly from hundredths.
    ///
    /// # Example
    /// ```
    /// use wallet_card::balance::Balance;
    /// assert_eq!(Balance::from_minor(12345).to_string(), "123.45");
    /// ```
    pub fn from_minor(minor: u64) -> Self {
        Self { minor }
    }

    /// Creates a `Balance` from a float, rounding to the nearest hundredth.
    ///
    /// Negative, NaN and infinite inputs clamp to zero; values beyond the
    /// representable range saturate.
    ///
    /// # Example
    /// ```
    /// use wallet_card::balance::Balance;
    /// assert_eq!(Balance::from_float(1.005).as_minor_units(), 100);
    /// assert_eq!(Balance::from_float(-3.0), Balance::ZERO);
    /// ```
    pub fn from_float(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        let scaled = (value * MINOR_PER_MAJOR as f64).round();
        // float-to-int `as` saturates at u64::MAX
        Self { minor: scaled as u64 }
    }

    /// Parses a plain decimal string such as `"12"`, `"12.3"` or `".25"`.
    pub fn new_from_str(s: &str) -> Result<Self, ParseBalanceError> {
        let s = s.trim();

        if s.starts_with('-') {
            return Err(ParseBalanceError::Negative);
        }

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseBalanceError::InvalidFormat);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major_str) || !all_digits(minor_str) {
            return Err(ParseBalanceError::InvalidFormat);
        }

        if minor_str.len() > DECIMALS as usize {
            return Err(ParseBalanceError::TooManyDecimals);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<u64>()
                .map_err(|_| ParseBalanceError::InvalidFormat)?
        };

        let minor_units = if minor_str.is_empty() {
            0
        } else {
            // at most two digits; the padding below scales "3" to 30
            minor_str
                .parse::<u64>()
                .map_err(|_| ParseBalanceError::InvalidFormat)?
                * 10_u64.pow(DECIMALS - minor_str.len() as u32)
        };

        let minor = major_units
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor_units))
            .ok_or(ParseBalanceError::InvalidFormat)?;

        Ok(Self { minor })
    }

    /// Converts a JSON number or decimal string into a `Balance`.
    ///
    /// Numbers go through their decimal text, so `0.129` and `"0.129"` both
    /// fail with `TooManyDecimals`, and an out-of-range value fails with
    /// `InvalidFormat` however it is written. Exponent forms such as `1e-7`
    /// are not plain decimals and are rejected.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ParseBalanceError> {
        match value {
            serde_json::Value::String(s) => Self::new_from_str(s),
            serde_json::Value::Number(n) => Self::new_from_str(&n.to_string()),
            _ => Err(ParseBalanceError::InvalidFormat),
        }
    }
}

impl FromStr for Balance {
    type Err = ParseBalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<serde_json::Value> for Balance {
    type Error = ParseBalanceError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json_value(&value)
    }
}

impl From<Balance> for String {
    fn from(balance: Balance) -> Self {
        balance.to_string()
    }
}

/// Formats the balance as `<major>.<minor>` with exactly two fractional digits.
impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.minor / MINOR_PER_MAJOR,
            self.minor % MINOR_PER_MAJOR,
            width = DECIMALS as usize
        )
    }
}
