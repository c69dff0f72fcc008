use safe_calc::core::rendezvous::run_two_phase;
use safe_calc::CalcError;

#[test]
fn test_barrier_synchronization() {
    let report = run_two_phase(4).unwrap();

    assert_eq!(report.workers, 4);
    assert_eq!(report.observed, vec![4, 4, 4, 4]);
    assert!(report.all_synchronized());
}

#[test]
fn test_barrier_is_reusable_across_runs() {
    for workers in [1, 2, 8, 16] {
        let report = run_two_phase(workers).unwrap();
        assert_eq!(report.observed.len(), workers);
        assert!(
            report.all_synchronized(),
            "{} workers did not all see each other: {:?}",
            workers,
            report.observed
        );
    }
}

#[test]
fn test_zero_workers_is_config_error() {
    match run_two_phase(0) {
        Err(CalcError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "rendezvous.workers");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}
