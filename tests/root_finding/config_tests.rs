//! tests for the shared solver configuration
use rootlab::root_finding::config::{DEFAULT_MAX_ITER, DEFAULT_TOL};
use rootlab::root_finding::{Method, RootFindingError, SolverCfg, ToleranceError};

#[test]
fn defaults() {
    let cfg = SolverCfg::new();
    assert_eq!(cfg.tol(), DEFAULT_TOL);
    assert_eq!(cfg.max_iter(), DEFAULT_MAX_ITER);
    assert_eq!(cfg, SolverCfg::default());
}

#[test]
fn invalid_tol() {
    for bad in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
        let err = SolverCfg::new().set_tol(bad).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidTol { .. }));
    }
}

#[test]
fn invalid_max_iter_zero() {
    let err = SolverCfg::new().set_max_iter(0).unwrap_err();
    assert_eq!(err, RootFindingError::InvalidMaxIter { got: 0 });
}

#[test]
fn setters_chain() -> Result<(), RootFindingError> {
    let cfg = SolverCfg::new().set_tol(1e-10)?.set_max_iter(7)?;
    assert_eq!(cfg.tol(), 1e-10);
    assert_eq!(cfg.max_iter(), 7);
    Ok(())
}

#[test]
fn methods_run_in_fixed_order() {
    let names: Vec<&str> = Method::ALL.iter().map(|m| m.display_name()).collect();
    assert_eq!(names, [
        "Bisection",
        "Fixed-Point Iteration",
        "Newton-Raphson",
        "Secant",
        "Regula Falsi",
    ]);
}
