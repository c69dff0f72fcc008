use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_positive_number;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RendezvousReport {
    pub workers: usize,
    /// Counter value each worker saw after the first barrier, indexed by worker id.
    pub observed: Vec<usize>,
}

impl RendezvousReport {
    /// True when every worker saw all of its peers' increments.
    pub fn all_synchronized(&self) -> bool {
        self.observed.iter().all(|&count| count == self.workers)
    }
}

/// Two-phase barrier run: every worker increments a shared counter, waits for
/// all peers, reads the counter, then waits once more before exiting.
///
/// A worker that panics after both barriers is reported as
/// `CalcError::WorkerPanicked`. A panic before a barrier leaves the remaining
/// workers blocked in `Barrier::wait`, which has no timeout, so this call
/// would not return.
pub fn run_two_phase(workers: usize) -> Result<RendezvousReport> {
    validate_positive_number("rendezvous.workers", workers, 1)?;

    let barrier = Arc::new(Barrier::new(workers));
    let counter = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::with_capacity(workers);

    for id in 0..workers {
        let barrier = Arc::clone(&barrier);
        let counter = Arc::clone(&counter);
        handles.push(thread::spawn(move || {
            tracing::debug!("Worker {} is preparing", id);
            counter.fetch_add(1, Ordering::SeqCst);

            barrier.wait();

            let seen = counter.load(Ordering::SeqCst);
            tracing::debug!("Worker {} observed {} arrivals", id, seen);

            barrier.wait();
            seen
        }));
    }

    // Joining in spawn order keeps `observed` indexed by worker id.
    let mut observed = Vec::with_capacity(workers);
    for (id, handle) in handles.into_iter().enumerate() {
        let seen = handle
            .join()
            .map_err(|_| CalcError::WorkerPanicked { worker: id })?;
        observed.push(seen);
    }

    tracing::info!("Rendezvous of {} workers completed", workers);
    Ok(RendezvousReport { workers, observed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_worker() {
        let report = run_two_phase(1).unwrap();
        assert_eq!(report.observed, vec![1]);
        assert!(report.all_synchronized());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = run_two_phase(0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_report_detects_stragglers() {
        let report = RendezvousReport {
            workers: 3,
            observed: vec![3, 2, 3],
        };
        assert!(!report.all_synchronized());
    }
}
