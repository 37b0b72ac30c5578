//! Decides which methods can run on the loaded parameters, runs them and
//! collects one [`MethodRun`] per method.
//!
//! Required parameters per method
//! ├ bisection, regula falsi : `function`, `a`, `b`
//! ├ fixed point             : `g`, `x0`
//! ├ newton                  : `function`, `derivative`, `x0`
//! └ secant                  : `function`, `x0`, `x1`
//!
//! A method whose parameters are missing is skipped. Any error while running
//! a method (bad parameter type, parse error, solver error) is captured in its
//! [`Outcome::Failed`] and never stops the other methods.

use log::{info, warn};
use thiserror::Error;

use crate::expression::{Expression, ParseError};
use crate::input::{InputError, Params};
use crate::report::{MethodRun, Outcome, Solution};
use crate::root_finding::algorithms::Method;
use crate::root_finding::bisection::bisection;
use crate::root_finding::config::{SolverCfg, DEFAULT_MAX_ITER, DEFAULT_TOL};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::fixed_point::fixed_point;
use crate::root_finding::newton::newton;
use crate::root_finding::regula_falsi::regula_falsi;
use crate::root_finding::secant::secant;


pub const KEY_FUNCTION   : &str = "function";
pub const KEY_DERIVATIVE : &str = "derivative";
pub const KEY_G          : &str = "g";
pub const KEY_A          : &str = "a";
pub const KEY_B          : &str = "b";
pub const KEY_X0         : &str = "x0";
pub const KEY_X1         : &str = "x1";
pub const KEY_TOL        : &str = "tol";
pub const KEY_MAX_ITER   : &str = "max_iter";


/// Why a single method run failed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Solve(#[from] RootFindingError),
}


/// Parameters plus the validated solver configuration shared by all methods.
#[derive(Debug, Clone)]
pub struct Problem {
    params : Params,
    cfg    : SolverCfg,
}

impl Problem {
    /// Validates `tol` (default 1e-6) and `max_iter` (default 100).
    ///
    /// These apply to every method, so an invalid value is an error for the
    /// whole problem rather than for individual methods.
    pub fn from_params(params: Params) -> Result<Self, InputError> {
        let tol = params.number(KEY_TOL)?.unwrap_or(DEFAULT_TOL);
        let max_iter = match params.number(KEY_MAX_ITER)? {
            None => DEFAULT_MAX_ITER,
            Some(v) if v >= 1.0 && v.fract() == 0.0 && v <= usize::MAX as f64 => v as usize,
            Some(v) => return Err(InputError::InvalidMaxIter { got: v }),
        };

        let cfg = SolverCfg::new()
            .set_tol(tol)
            .map_err(|_| InputError::InvalidTol { got: tol })?
            .set_max_iter(max_iter)
            .map_err(|_| InputError::InvalidMaxIter { got: max_iter as f64 })?;

        Ok(Self { params, cfg })
    }

    pub fn params(&self) -> &Params { &self.params }
    pub fn cfg(&self) -> SolverCfg { self.cfg }

    /// Runs every method in [`Method::ALL`] order.
    pub fn run_all(&self) -> Vec<MethodRun> {
        Method::ALL.iter().map(|&m| self.run(m)).collect()
    }

    /// Runs one method, capturing any failure in the outcome.
    pub fn run(&self, method: Method) -> MethodRun {
        let outcome = match self.solve(method) {
            Ok(Some(solution)) => Outcome::Solved(solution),
            Ok(None) => {
                info!("{method} skipped: missing parameters {:?}", required(method));
                Outcome::Skipped
            }
            Err(e) => {
                warn!("{method} failed: {e}");
                Outcome::Failed(e.to_string())
            }
        };
        MethodRun { method, outcome }
    }

    fn solve(&self, method: Method) -> Result<Option<Solution>, RunError> {
        if !required(method).iter().all(|k| self.params.contains(k)) {
            return Ok(None);
        }
        let cfg = self.cfg;

        let solution = match method {
            Method::Bisection => {
                let f = self.expression(KEY_FUNCTION)?;
                let seq = bisection(f.as_fn(), self.number(KEY_A)?, self.number(KEY_B)?, cfg)?;
                Solution::from(&seq)
            }
            Method::RegulaFalsi => {
                let f = self.expression(KEY_FUNCTION)?;
                let seq = regula_falsi(f.as_fn(), self.number(KEY_A)?, self.number(KEY_B)?, cfg)?;
                Solution::from(&seq)
            }
            Method::FixedPoint => {
                let g = self.expression(KEY_G)?;
                let seq = fixed_point(g.as_fn(), self.number(KEY_X0)?, cfg)?;
                Solution::from(&seq)
            }
            Method::Newton => {
                let f  = self.expression(KEY_FUNCTION)?;
                let df = self.expression(KEY_DERIVATIVE)?;
                let seq = newton(f.as_fn(), df.as_fn(), self.number(KEY_X0)?, cfg)?;
                Solution::from(&seq)
            }
            Method::Secant => {
                let f = self.expression(KEY_FUNCTION)?;
                let seq = secant(f.as_fn(), self.number(KEY_X0)?, self.number(KEY_X1)?, cfg)?;
                Solution::from(&seq)
            }
        };
        Ok(Some(solution))
    }

    /// A present numeric parameter; presence is checked by [`required`].
    fn number(&self, key: &str) -> Result<f64, RunError> {
        self.params
            .number(key)?
            .ok_or_else(|| missing(key))
    }

    fn expression(&self, key: &str) -> Result<Expression, RunError> {
        let src = self.params
            .expression(key)?
            .ok_or_else(|| missing(key))?;
        Ok(Expression::parse(&src)?)
    }
}


/// Parameters a method needs before it can run.
pub const fn required(method: Method) -> &'static [&'static str] {
    match method {
        Method::Bisection | Method::RegulaFalsi => &[KEY_FUNCTION, KEY_A, KEY_B],
        Method::FixedPoint => &[KEY_G, KEY_X0],
        Method::Newton     => &[KEY_FUNCTION, KEY_DERIVATIVE, KEY_X0],
        Method::Secant     => &[KEY_FUNCTION, KEY_X0, KEY_X1],
    }
}

fn missing(key: &str) -> RunError {
    InputError::Missing { key: key.to_string() }.into()
}
