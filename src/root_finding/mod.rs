// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod signs;
pub(crate) mod tolerances;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod fixed_point;
pub mod newton;
pub mod secant;

pub use algorithms::Method;
pub use config::SolverCfg;
pub use errors::{NumericError, PreconditionError, RootFindingError, ToleranceError};
pub use report::{IterationRecord, IterationSequence, TerminationReason, ToleranceSatisfied};
