use crate::core::{
    ConfigProvider, DivisionRequest, ResultFormatter, ResultStore, SafeDivider,
};
use crate::utils::error::{CalcError, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LineSource {
    Computed,
    Reused,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub request: DivisionRequest,
    pub line: String,
    pub source: LineSource,
    /// The divider refused this request.
    pub failed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub lines: Vec<String>,
    pub computed: usize,
    pub reused: usize,
    pub failed: usize,
}

/// Evaluates division requests, recording each formatted line in a
/// [`ResultStore`] and reusing lines that are already there.
pub struct CalcEngine<S: ResultStore> {
    store: S,
    divider: SafeDivider,
    formatter: ResultFormatter,
}

impl<S: ResultStore> CalcEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            divider: SafeDivider::default(),
            formatter: ResultFormatter::default(),
        }
    }

    pub fn with_config<C: ConfigProvider>(store: S, config: &C) -> Self {
        Self {
            store,
            divider: SafeDivider::new(config.overflow_policy()),
            formatter: ResultFormatter::new(config.error_style()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn evaluate(&self, request: DivisionRequest) -> Result<Evaluation> {
        let key = request.key();

        match self.store.get_data(&key).await {
            Ok(line) => {
                tracing::debug!("Reusing stored result for {}", key);
                // The store only keeps the line, so recompute whether it was refused.
                return Ok(Evaluation {
                    request,
                    line,
                    source: LineSource::Reused,
                    failed: self.divider.divide(request).is_err(),
                });
            }
            Err(ErrorCode::NotFound) => {}
            Err(code) => return Err(CalcError::StoreError { key, code }),
        }

        let outcome = self.divider.divide(request);
        let line = self.formatter.format(&outcome);
        self.store
            .set_data(&key, &line)
            .await
            .map_err(|code| CalcError::StoreError {
                key: key.clone(),
                code,
            })?;

        Ok(Evaluation {
            request,
            line,
            source: LineSource::Computed,
            failed: outcome.is_err(),
        })
    }

    pub async fn run(&self, requests: &[DivisionRequest]) -> Result<BatchReport> {
        tracing::info!("Evaluating {} division requests", requests.len());

        let mut report = BatchReport::default();
        for request in requests {
            let evaluation = self.evaluate(*request).await?;
            match evaluation.source {
                LineSource::Computed => report.computed += 1,
                LineSource::Reused => report.reused += 1,
            }
            if evaluation.failed {
                report.failed += 1;
            }
            report.lines.push(evaluation.line);
        }

        tracing::info!(
            "Batch finished: {} computed, {} reused, {} failed",
            report.computed,
            report.reused,
            report.failed
        );
        Ok(report)
    }
}
