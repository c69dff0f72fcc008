use crate::core::{DivisionOutcome, DivisionRequest, OverflowPolicy};
use crate::utils::error::ErrorCode;

/// Integer division that never panics: a zero divisor becomes
/// `Err(ErrorCode::InvalidArgument)` and the overflowing pair follows the
/// configured [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafeDivider {
    policy: OverflowPolicy,
}

impl SafeDivider {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn divide(&self, request: DivisionRequest) -> DivisionOutcome {
        let DivisionRequest { dividend, divisor } = request;
        if divisor == 0 {
            tracing::debug!("Rejected division by zero: {}", request);
            return Err(ErrorCode::InvalidArgument);
        }

        // checked_div only fails on i64::MIN / -1 once the zero case is gone
        match dividend.checked_div(divisor) {
            Some(quotient) => Ok(quotient),
            None => match self.policy {
                OverflowPolicy::Saturate => Ok(i64::MAX),
                OverflowPolicy::Wrap => Ok(dividend.wrapping_div(divisor)),
                OverflowPolicy::Error => {
                    tracing::debug!("Rejected overflowing division: {}", request);
                    Err(ErrorCode::Overflow)
                }
            },
        }
    }
}

/// Divide with the default policy.
pub fn divide(dividend: i64, divisor: i64) -> DivisionOutcome {
    SafeDivider::default().divide(DivisionRequest::new(dividend, divisor))
}
