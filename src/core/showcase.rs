//! Small language-feature helpers exercised by the `feature-tour` binary.

use crate::utils::error::ErrorCode;

pub fn create_greeting(name: &str, age: u32) -> String {
    format!("Hello, {}! You are {} years old.", name, age)
}

/// Emits `LOG: <message>` at info level and returns the rendered line.
pub fn log_message(message: &str) -> String {
    let line = format!("LOG: {}", message);
    tracing::info!("{}", line);
    line
}

pub fn multiply_by(factor: i64) -> impl Fn(i64) -> i64 {
    move |x| x * factor
}

/// Compile-time flavour: usable in `const` items, doubles its input.
pub const fn calculate_value(input: i64) -> i64 {
    input * 2
}

/// Run-time flavour: triples its input.
pub fn calculate_value_runtime(input: i64) -> i64 {
    input * 3
}

/// Ordered by name first, then age.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DataProcessor;

impl DataProcessor {
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self
    }

    pub fn process_data(&self, data: &str) -> Result<String, ErrorCode> {
        if data.is_empty() {
            return Err(ErrorCode::InvalidArgument);
        }
        Ok(format!("Processed: {}", data))
    }

    pub fn processor_info(&self) -> String {
        format!("DataProcessor version {}", Self::VERSION)
    }
}
