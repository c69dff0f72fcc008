use crate::core::{DivisionOutcome, ErrorStyle};
use crate::utils::error::ErrorCode;

pub fn format_result(value: i64) -> String {
    format!("Result: {}", value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFormatter {
    style: ErrorStyle,
}

impl ResultFormatter {
    pub fn new(style: ErrorStyle) -> Self {
        Self { style }
    }

    pub fn format(&self, outcome: &DivisionOutcome) -> String {
        match outcome {
            Ok(value) => format_result(*value),
            Err(code) => self.format_error(*code),
        }
    }

    pub fn format_error(&self, code: ErrorCode) -> String {
        match self.style {
            ErrorStyle::Code => format!("Error occurred: {}", code.code()),
            ErrorStyle::Message => match code {
                ErrorCode::InvalidArgument => {
                    "Error: Invalid argument (division by zero)".to_string()
                }
                other => format!("Error: {}", other),
            },
        }
    }
}
