pub mod divider;
pub mod engine;
pub mod formatter;
pub mod rendezvous;
pub mod showcase;

pub use crate::domain::model::{DivisionOutcome, DivisionRequest, ErrorStyle, OverflowPolicy};
pub use crate::domain::ports::{ConfigProvider, ResultStore};
pub use crate::utils::error::Result;
pub use divider::SafeDivider;
pub use formatter::ResultFormatter;
