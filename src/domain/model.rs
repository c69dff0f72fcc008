use crate::utils::error::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either the quotient or the reason the division was refused.
pub type DivisionOutcome = std::result::Result<i64, ErrorCode>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisionRequest {
    pub dividend: i64,
    pub divisor: i64,
}

impl DivisionRequest {
    pub fn new(dividend: i64, divisor: i64) -> Self {
        Self { dividend, divisor }
    }

    /// Key under which the formatted outcome is recorded in a result store.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DivisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dividend, self.divisor)
    }
}

/// What to do with the single overflowing input pair, `i64::MIN / -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Clamp to `i64::MAX`. A zero divisor stays the only error.
    #[default]
    Saturate,
    /// Two's complement wraparound, yielding `i64::MIN`.
    Wrap,
    /// Report `ErrorCode::Overflow`.
    Error,
}

/// How the error side of an outcome is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ErrorStyle {
    #[default]
    Message,
    Code,
}
