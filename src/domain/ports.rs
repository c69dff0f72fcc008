use crate::utils::error::ErrorCode;
use async_trait::async_trait;

/// Keyed storage for formatted results.
///
/// Both methods answer with the same sum type the divider uses, so a missing
/// key is an ordinary `Err(ErrorCode::NotFound)` rather than an exception.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn get_data(&self, key: &str) -> Result<String, ErrorCode>;
    async fn set_data(&self, key: &str, value: &str) -> Result<(), ErrorCode>;
}

pub trait ConfigProvider: Send + Sync {
    fn overflow_policy(&self) -> crate::domain::model::OverflowPolicy;
    fn error_style(&self) -> crate::domain::model::ErrorStyle;
    fn workers(&self) -> usize;
}
