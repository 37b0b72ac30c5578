//! tests for the secant root finding algorithm
use approx::assert_abs_diff_eq;

use rootlab::expression::{EvalFailure, Expression};
use rootlab::root_finding::secant::secant;
use rootlab::root_finding::{
    NumericError, RootFindingError, SolverCfg, TerminationReason, ToleranceSatisfied,
};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = secant(f, 1.0, 2.0, SolverCfg::new())?;

    assert_eq!(res.termination(), TerminationReason::ToleranceReached);
    assert!(res.iterations() <= 10);
    assert_abs_diff_eq!(res.root().unwrap(), 2.0_f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn first_record() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = secant(f, 1.0, 2.0, SolverCfg::new())?;

    let first = &res.records()[0];
    assert_eq!((first.x_prev, first.x), (1.0, 2.0));
    assert_eq!(first.fx, 2.0);
    assert_abs_diff_eq!(first.x_next, 4.0 / 3.0, epsilon = 1e-15);
    assert_abs_diff_eq!(first.erro, 2.0 / 3.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn points_roll_forward() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let res = secant(f, 1.0, 2.0, SolverCfg::new())?;

    for pair in res.records().windows(2) {
        assert_eq!(pair[1].x_prev, pair[0].x);
        assert_eq!(pair[1].x, pair[0].x_next);
    }
    assert_eq!(res.root(), res.last().map(|r| r.x_next));
    Ok(())
}

#[test]
fn linear_function_in_one_step() -> TestResult {
    let f   = |x: f64| Ok(x + 1.0);
    let res = secant(f, 0.0, 1.0, SolverCfg::new())?;

    assert_eq!(res.root(), Some(-1.0));
    assert!(res.len() <= 2);
    Ok(())
}

#[test]
fn residual_of_second_guess_is_tested() -> TestResult {
    let f   = |x: f64| Ok(x + 1.0);
    let cfg = SolverCfg::new().set_tol(1e-3)?;
    let res = secant(f, -1.0005, -1.0004, cfg)?;

    assert_eq!(res.iterations(), 1);
    assert_eq!(res.tolerance(), ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn step_reached_before_residual() -> TestResult {
    let f   = |x: f64| Ok(1000.0 * (x - 1.0));
    let cfg = SolverCfg::new().set_tol(1e-3)?;
    let res = secant(f, 1.0006, 1.0005, cfg)?;

    assert_eq!(res.iterations(), 1);
    assert!(res.records()[0].fx.abs() >= 1e-3);
    assert_eq!(res.tolerance(), ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root().unwrap(), 1.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn equal_guesses_error() {
    let f   = |x: f64| Ok(x * x - 2.0);
    let err = secant(f, 1.0, 1.0, SolverCfg::new()).unwrap_err();

    assert_eq!(
        err,
        RootFindingError::Numeric(NumericError::ZeroDenominator { x_prev: 1.0, x: 1.0 })
    );
}

#[test]
fn constant_function_errors() {
    let f   = |_x: f64| Ok(5.0);
    let err = secant(f, 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(err, RootFindingError::Numeric(NumericError::ZeroDenominator { .. })));
}

#[test]
fn hits_iteration_limit() -> TestResult {
    let f   = |x: f64| Ok(x * x + 1.0);
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = secant(f, 0.0, 1.0, cfg)?;

    assert_eq!(res.len(), 1);
    assert_eq!(res.termination(), TerminationReason::IterationLimit);
    Ok(())
}

#[test]
fn evaluation_error_on_initial_guess() {
    let f   = Expression::parse("1/x").unwrap();
    let err = secant(f.as_fn(), 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Evaluation(ref e) if e.x == 0.0 && e.cause == EvalFailure::DivisionByZero
    ));
}
