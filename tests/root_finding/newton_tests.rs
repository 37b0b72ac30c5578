//! tests for the newton-raphson root finding algorithm
use approx::assert_abs_diff_eq;

use rootlab::expression::Expression;
use rootlab::root_finding::newton::newton;
use rootlab::root_finding::{
    NumericError, RootFindingError, SolverCfg, TerminationReason, ToleranceSatisfied,
};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let df  = |x: f64| Ok(2.0 * x);
    let res = newton(f, df, 1.0, SolverCfg::new())?;

    assert_eq!(res.termination(), TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance(), ToleranceSatisfied::AbsFxReached);
    assert!(res.iterations() <= 6);
    assert_abs_diff_eq!(res.root().unwrap(), 2.0_f64.sqrt(), epsilon = 1e-9);
    Ok(())
}

#[test]
fn step_reached_before_residual() -> TestResult {
    // steep slope: the step is already below tol while |f(x)| is not
    let f   = |x: f64| Ok(1000.0 * (x - 1.0));
    let df  = |_x: f64| Ok(1000.0);
    let cfg = SolverCfg::new().set_tol(1e-3)?;
    let res = newton(f, df, 1.0005, cfg)?;

    assert_eq!(res.iterations(), 1);
    assert!(res.records()[0].fx.abs() >= 1e-3);
    assert_eq!(res.tolerance(), ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root().unwrap(), 1.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn first_record() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let df  = |x: f64| Ok(2.0 * x);
    let res = newton(f, df, 1.0, SolverCfg::new())?;

    let first = &res.records()[0];
    assert_eq!(first.iter, 1);
    assert_eq!(first.x, 1.5);
    assert_eq!(first.fx, -1.0);
    assert_eq!(first.dfx, 2.0);
    assert_eq!(first.erro, 0.5);
    Ok(())
}

#[test]
fn residual_belongs_to_previous_estimate() -> TestResult {
    let f   = |x: f64| Ok(x * x - 2.0);
    let df  = |x: f64| Ok(2.0 * x);
    let res = newton(f, df, 1.0, SolverCfg::new())?;

    for pair in res.records().windows(2) {
        let x_prev = pair[0].x;
        assert_eq!(pair[1].fx, x_prev * x_prev - 2.0);
        assert_eq!(pair[1].dfx, 2.0 * x_prev);
    }
    Ok(())
}

#[test]
fn from_expressions() -> TestResult {
    let f   = Expression::parse("x^2 - 2").unwrap();
    let df  = Expression::parse("2*x").unwrap();
    let res = newton(f.as_fn(), df.as_fn(), 1.0, SolverCfg::new())?;

    assert!(res.is_converged());
    assert!(res.iterations() <= 6);
    assert_abs_diff_eq!(res.root().unwrap(), 1.414_213_5, epsilon = 1e-6);
    Ok(())
}

#[test]
fn zero_derivative_at_start() {
    let f   = |x: f64| Ok(x * x - 2.0);
    let df  = |x: f64| Ok(2.0 * x);
    let err = newton(f, df, 0.0, SolverCfg::new()).unwrap_err();

    assert_eq!(err, RootFindingError::Numeric(NumericError::ZeroDerivative { x: 0.0 }));
}

#[test]
fn zero_derivative_mid_iteration() {
    let f   = |x: f64| Ok(x - 2.0);
    let df  = |x: f64| Ok(if x == 2.0 { 0.0 } else { 1.0 });
    let err = newton(f, df, 0.0, SolverCfg::new()).unwrap_err();

    assert_eq!(err, RootFindingError::Numeric(NumericError::ZeroDerivative { x: 2.0 }));
}

#[test]
fn two_cycle_hits_iteration_limit() -> TestResult {
    // x^3 - 2x + 2 from 0 alternates between 0 and 1
    let f   = |x: f64| Ok(x.powi(3) - 2.0 * x + 2.0);
    let df  = |x: f64| Ok(3.0 * x * x - 2.0);
    let cfg = SolverCfg::new().set_max_iter(10)?;
    let res = newton(f, df, 0.0, cfg)?;

    assert_eq!(res.len(), 10);
    assert_eq!(res.termination(), TerminationReason::IterationLimit);
    let xs: Vec<f64> = res.records().iter().map(|r| r.x).collect();
    assert_eq!(&xs[..4], &[1.0, 0.0, 1.0, 0.0]);
    Ok(())
}
