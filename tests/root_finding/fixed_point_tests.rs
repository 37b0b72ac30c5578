//! tests for fixed-point iteration
use approx::assert_abs_diff_eq;

use rootlab::expression::{EvalFailure, Expression};
use rootlab::root_finding::fixed_point::fixed_point;
use rootlab::root_finding::{RootFindingError, SolverCfg, TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_dottie_number() -> TestResult {
    let g   = |x: f64| Ok(x.cos());
    let res = fixed_point(g, 0.5, SolverCfg::new())?;

    assert_eq!(res.termination(), TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance(), ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root().unwrap(), 0.739_085_133_2, epsilon = 1e-5);
    Ok(())
}

#[test]
fn records_image_of_previous_estimate() -> TestResult {
    let g   = |x: f64| Ok(x.cos());
    let res = fixed_point(g, 0.5, SolverCfg::new())?;

    let first = &res.records()[0];
    assert_eq!(first.x, 0.5_f64.cos());
    assert_eq!(first.erro, (0.5_f64.cos() - 0.5).abs());

    for pair in res.records().windows(2) {
        assert_eq!(pair[1].x, pair[0].x.cos());
        assert_eq!(pair[1].gx_prev, pair[1].x);
    }
    Ok(())
}

#[test]
fn fixed_point_at_start() -> TestResult {
    let g   = |x: f64| Ok(x);
    let res = fixed_point(g, 3.0, SolverCfg::new())?;

    assert_eq!(res.iterations(), 1);
    assert_eq!(res.root(), Some(3.0));
    assert_eq!(res.tolerance(), ToleranceSatisfied::StepSizeReached);
    Ok(())
}

#[test]
fn divergence_runs_to_iteration_limit() -> TestResult {
    let g   = |x: f64| Ok(2.0 * x);
    let cfg = SolverCfg::new().set_max_iter(10)?;
    let res = fixed_point(g, 1.0, cfg)?;

    assert_eq!(res.len(), 10);
    assert_eq!(res.termination(), TerminationReason::IterationLimit);
    assert_eq!(res.tolerance(), ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.root(), Some(1024.0));
    Ok(())
}

#[test]
fn overflow_is_an_evaluation_error() {
    let g   = Expression::parse("x^2").unwrap();
    let err = fixed_point(g.as_fn(), 10.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Evaluation(ref e)
        if matches!(e.cause, EvalFailure::NonFinite { value } if value.is_infinite())
    ));
}
