//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;

use rootlab::expression::{EvalFailure, Expression};
use rootlab::root_finding::bisection::bisection;
use rootlab::root_finding::{
    PreconditionError, RootFindingError, SolverCfg, TerminationReason, ToleranceSatisfied,
};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = bisection(f, 0.0, 2.0, SolverCfg::new())?;

    assert_eq!(res.termination(), TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance(), ToleranceSatisfied::StepSizeReached);
    assert!(res.iterations() <= 25);
    assert_abs_diff_eq!(res.root().unwrap(), 2.0_f64.sqrt(), epsilon = 1e-5);
    Ok(())
}

#[test]
fn first_step_is_undefined() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = bisection(f, 0.0, 2.0, SolverCfg::new())?;

    let first = &res.records()[0];
    assert_eq!(first.iter, 1);
    assert_eq!((first.a, first.b, first.x), (0.0, 2.0, 1.0));
    assert_eq!(first.fx, -1.0);
    assert!(first.erro.is_nan());
    assert!(res.records()[1..].iter().all(|r| r.erro.is_finite()));
    Ok(())
}

#[test]
fn bracket_halves_each_iteration() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = bisection(f, 0.0, 2.0, SolverCfg::new())?;

    for pair in res.records().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert_eq!(next.b - next.a, (prev.b - prev.a) / 2.0);
        assert!((next.a..=next.b).contains(&next.x));
    }
    Ok(())
}

#[test]
fn steps_never_increase() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = bisection(f, 0.0, 2.0, SolverCfg::new())?;

    let steps: Vec<f64> = res.records()[1..].iter().map(|r| r.erro).collect();
    assert!(steps.windows(2).all(|w| w[1] <= w[0]));
    Ok(())
}

#[test]
fn exact_root_at_first_midpoint() -> TestResult {
    let f   = |x: f64| Ok(x);
    let res = bisection(f, -1.0, 1.0, SolverCfg::new())?;

    assert_eq!(res.iterations(), 1);
    assert_eq!(res.root(), Some(0.0));
    assert_eq!(res.tolerance(), ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn root_on_endpoint_is_accepted() -> TestResult {
    let f   = |x: f64| Ok(x - 2.0);
    let res = bisection(f, 0.0, 2.0, SolverCfg::new())?;

    assert!(res.is_converged());
    assert_abs_diff_eq!(res.root().unwrap(), 2.0, epsilon = 1e-5);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| Ok(x * x - 2.0);
    let err = bisection(f, 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Precondition(PreconditionError::NoSignChange { a, b, fa, fb })
        if a == 0.0 && b == 1.0 && fa == -2.0 && fb == -1.0
    ));
    assert!(err.to_string().contains("opposite-sign"));
}

#[test]
fn hits_iteration_limit() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let cfg = SolverCfg::new().set_max_iter(3)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.len(), 3);
    assert_eq!(res.termination(), TerminationReason::IterationLimit);
    assert_eq!(res.tolerance(), ToleranceSatisfied::ToleranceNotReached);
    assert!(!res.is_converged());
    assert_eq!(res.root(), Some(1.25));
    Ok(())
}

#[test]
fn never_exceeds_max_iter() -> TestResult {
    let f = |x: f64| Ok(x.powi(3) - x - 1.0);
    for max_iter in [1, 2, 5, 10] {
        let cfg = SolverCfg::new().set_tol(1e-15)?.set_max_iter(max_iter)?;
        let res = bisection(f, 1.0, 2.0, cfg)?;
        assert!(res.len() <= max_iter);
    }
    Ok(())
}

#[test]
fn evaluation_error_is_propagated() {
    let f   = Expression::parse("sqrt(x) - 1").unwrap();
    let err = bisection(f.as_fn(), -1.0, 4.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Evaluation(ref e)
        if e.x == -1.0 && e.cause == EvalFailure::Domain { function: "sqrt" }
    ));
}
