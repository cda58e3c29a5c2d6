//! Fiscal period value type.
//!
//! A period identifies one calendar month as `"YYYY-MM"`. All record
//! filtering and report building keys on this type, so parsing is strict:
//! a malformed period string is rejected before it can reach a calculation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap()
});

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// The string does not match the `YYYY-MM` format (month 01-12).
    #[error("invalid period {0:?}, expected YYYY-MM")]
    InvalidFormat(String),
}

/// A calendar month identifier, parsed from `"YYYY-MM"`.
///
/// Ordering is chronological (year first, then month), which is what the
/// classifier relies on when sorting declarations by recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Parses a `"YYYY-MM"` string, rejecting anything outside month 01-12.
    pub fn parse(s: &str) -> Result<Self, PeriodError> {
        if !PERIOD_RE.is_match(s) {
            return Err(PeriodError::InvalidFormat(s.to_string()));
        }

        // The regex guarantees both halves parse.
        let year = s[0..4].parse().unwrap();
        let month = s[5..7].parse().unwrap();

        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Spanish month name, e.g. `"Enero"` for month 01.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Human-readable form for report headers, e.g. `"Enero 2025"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// The period with `-` replaced by `_`, used in generated file names.
    pub fn underscored(&self) -> String {
        format!("{:04}_{:02}", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        p.to_string()
    }
}
