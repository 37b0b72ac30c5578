//! Root-finding algorithm definitions.
//!
//! Provides the [`Method`] enum naming every supported solver, in the order
//! the runner executes them.


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Bisection,
    FixedPoint,
    Newton,
    Secant,
    RegulaFalsi,
}

impl Method {
    /// Execution and reporting order.
    pub const ALL: [Method; 5] = [
        Method::Bisection,
        Method::FixedPoint,
        Method::Newton,
        Method::Secant,
        Method::RegulaFalsi,
    ];

    /// Heading used in reports and the `method` column of the CSV.
    pub const fn display_name(self) -> &'static str {
        match self {
            Method::Bisection   => "Bisection",
            Method::FixedPoint  => "Fixed-Point Iteration",
            Method::Newton      => "Newton-Raphson",
            Method::Secant      => "Secant",
            Method::RegulaFalsi => "Regula Falsi",
        }
    }

    /// Short machine-friendly name, used in logs.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Method::Bisection   => "bisection",
            Method::FixedPoint  => "fixed_point",
            Method::Newton      => "newton",
            Method::Secant      => "secant",
            Method::RegulaFalsi => "regula_falsi",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
