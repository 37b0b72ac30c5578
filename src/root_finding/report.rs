//! Iteration records and the [`IterationSequence`] returned by all
//! root-finding algorithms.
//!
//! Record shapes
//! ├ [`BracketRecord`]    : bisection, regula falsi  {iter, a, b, x, f(x), erro}
//! ├ [`FixedPointRecord`] : fixed-point iteration    {iter, x, g(x_prev), erro}
//! ├ [`NewtonRecord`]     : newton-raphson           {iter, x, f(x), f'(x), erro}
//! └ [`SecantRecord`]     : secant                   {iter, x_{k-1}, x_k, x_{k+1}, f(x_k), erro}
//!
//! `erro` is the step |x_new - x_old|. It is NaN on the first iteration of the
//! bracket methods, which have no previous estimate.


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - bracket methods, newton, secant
///     - |f(x)| < tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - all methods
///     - |x_n - x_{n-1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - all methods, together with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Fields every record exposes, whatever its shape.
pub trait IterationRecord {
    /// 1-based iteration index.
    fn iter(&self) -> usize;
    /// Root estimate produced by this iteration.
    fn estimate(&self) -> f64;
    /// Step size `erro` (NaN when undefined).
    fn step(&self) -> f64;
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketRecord {
    pub iter : usize,
    pub a    : f64,
    pub b    : f64,
    pub x    : f64,
    pub fx   : f64,
    pub erro : f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointRecord {
    pub iter    : usize,
    pub x       : f64,
    pub gx_prev : f64,
    pub erro    : f64,
}

/// `x` is the updated estimate; `fx` and `dfx` were evaluated at the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRecord {
    pub iter : usize,
    pub x    : f64,
    pub fx   : f64,
    pub dfx  : f64,
    pub erro : f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantRecord {
    pub iter   : usize,
    pub x_prev : f64,
    pub x      : f64,
    pub x_next : f64,
    pub fx     : f64,
    pub erro   : f64,
}

macro_rules! impl_iteration_record {
    ($record:ty, $estimate:ident) => {
        impl IterationRecord for $record {
            #[inline] fn iter(&self)     -> usize { self.iter }
            #[inline] fn estimate(&self) -> f64   { self.$estimate }
            #[inline] fn step(&self)     -> f64   { self.erro }
        }
    };
}
impl_iteration_record!(BracketRecord, x);
impl_iteration_record!(FixedPointRecord, x);
impl_iteration_record!(NewtonRecord, x);
impl_iteration_record!(SecantRecord, x_next);


/// Append-only, ordered trace of one solver invocation plus its final status.
///
/// [`IterationSequence`]
/// - `records`     : one record per completed iteration, `iter` = 1, 2, ...
/// - `termination` : why the solver stopped ([`TerminationReason`])
/// - `tolerance`   : which criterion was met ([`ToleranceSatisfied`])
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSequence<R> {
    records     : Vec<R>,
    termination : TerminationReason,
    tolerance   : ToleranceSatisfied,
}

impl<R: IterationRecord> IterationSequence<R> {
    pub(crate) fn with_capacity(max_iter: usize) -> Self {
        Self {
            records     : Vec::with_capacity(max_iter.min(1024)),
            termination : TerminationReason::IterationLimit,
            tolerance   : ToleranceSatisfied::ToleranceNotReached,
        }
    }

    pub(crate) fn push(&mut self, record: R) {
        debug_assert_eq!(record.iter(), self.records.len() + 1);
        self.records.push(record);
    }

    pub(crate) fn converged(mut self, tolerance: ToleranceSatisfied) -> Self {
        self.termination = TerminationReason::ToleranceReached;
        self.tolerance   = tolerance;
        self
    }

    pub fn records(&self) -> &[R] { &self.records }
    pub fn into_records(self) -> Vec<R> { self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn last(&self) -> Option<&R> { self.records.last() }

    pub fn termination(&self) -> TerminationReason { self.termination }
    pub fn tolerance(&self) -> ToleranceSatisfied { self.tolerance }

    /// Final root estimate, if at least one iteration ran.
    pub fn root(&self) -> Option<f64> {
        self.records.last().map(IterationRecord::estimate)
    }

    /// Number of recorded iterations.
    pub fn iterations(&self) -> usize { self.records.len() }

    pub fn is_converged(&self) -> bool {
        self.termination == TerminationReason::ToleranceReached
    }
}

impl<'a, R> IntoIterator for &'a IterationSequence<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
