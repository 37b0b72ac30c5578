//! The fixed allow-list of named constants and functions.
//!
//! Nothing outside this table can be referenced from an expression; lookups
//! of any other identifier fail at parse time.

use std::f64::consts;


/// Named constants.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi"  => Some(consts::PI),
        "e"   => Some(consts::E),
        "tau" => Some(consts::TAU),
        _     => None,
    }
}


/// Allowed functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    Sin, Cos, Tan, Asin, Acos, Atan,
    Sinh, Cosh, Tanh, Asinh, Acosh, Atanh,
    Exp, Expm1, Exp2, Log, Log10, Log2, Log1p,
    Sqrt, Cbrt, Abs, Floor, Ceil, Trunc,
    Degrees, Radians,
    Erf, Erfc, Gamma, Lgamma,
    Atan2, Pow, Hypot, Copysign, Fmod, Remainder, Ldexp,
}

/// Accepted argument counts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Arity {
    One,
    Two,
    OneOrTwo,
}
impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::One      => n == 1,
            Arity::Two      => n == 2,
            Arity::OneOrTwo => n == 1 || n == 2,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Arity::One      => "1",
            Arity::Two      => "2",
            Arity::OneOrTwo => "1 or 2",
        }
    }
}

impl Builtin {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        use Builtin::*;
        let f = match name {
            "sin"   => Sin,   "cos"   => Cos,   "tan"   => Tan,
            "asin"  => Asin,  "acos"  => Acos,  "atan"  => Atan,
            "sinh"  => Sinh,  "cosh"  => Cosh,  "tanh"  => Tanh,
            "asinh" => Asinh, "acosh" => Acosh, "atanh" => Atanh,
            "exp"   => Exp,   "expm1" => Expm1, "exp2"  => Exp2,
            "log"   => Log,   "log10" => Log10, "log2"  => Log2,
            "log1p" => Log1p, "sqrt"  => Sqrt,  "cbrt"  => Cbrt,
            "abs" | "fabs" => Abs,
            "floor" => Floor, "ceil"  => Ceil,  "trunc" => Trunc,
            "degrees" => Degrees, "radians" => Radians,
            "erf"   => Erf,   "erfc"  => Erfc,
            "gamma" => Gamma, "lgamma" => Lgamma,
            "atan2" => Atan2, "pow"   => Pow,   "hypot" => Hypot,
            "copysign" => Copysign, "fmod" => Fmod,
            "remainder" => Remainder, "ldexp" => Ldexp,
            _ => return None,
        };
        Some(f)
    }

    pub const fn name(self) -> &'static str {
        use Builtin::*;
        match self {
            Sin => "sin", Cos => "cos", Tan => "tan",
            Asin => "asin", Acos => "acos", Atan => "atan",
            Sinh => "sinh", Cosh => "cosh", Tanh => "tanh",
            Asinh => "asinh", Acosh => "acosh", Atanh => "atanh",
            Exp => "exp", Expm1 => "expm1", Exp2 => "exp2",
            Log => "log", Log10 => "log10", Log2 => "log2", Log1p => "log1p",
            Sqrt => "sqrt", Cbrt => "cbrt", Abs => "abs",
            Floor => "floor", Ceil => "ceil", Trunc => "trunc",
            Degrees => "degrees", Radians => "radians",
            Erf => "erf", Erfc => "erfc", Gamma => "gamma", Lgamma => "lgamma",
            Atan2 => "atan2", Pow => "pow", Hypot => "hypot",
            Copysign => "copysign", Fmod => "fmod",
            Remainder => "remainder", Ldexp => "ldexp",
        }
    }

    pub(crate) const fn arity(self) -> Arity {
        use Builtin::*;
        match self {
            Log => Arity::OneOrTwo,
            Atan2 | Pow | Hypot | Copysign | Fmod | Remainder | Ldexp => Arity::Two,
            _ => Arity::One,
        }
    }

    /// Applies the function. Argument count has been checked by the parser.
    ///
    /// Domain violations come back as NaN (or ±inf for poles) and are
    /// reported by the evaluator.
    pub(crate) fn apply(self, args: &[f64]) -> f64 {
        use Builtin::*;
        let x = args[0];
        let y = args.get(1).copied();
        match self {
            Sin   => x.sin(),   Cos   => x.cos(),   Tan   => x.tan(),
            Asin  => x.asin(),  Acos  => x.acos(),  Atan  => x.atan(),
            Sinh  => x.sinh(),  Cosh  => x.cosh(),  Tanh  => x.tanh(),
            Asinh => x.asinh(), Acosh => x.acosh(), Atanh => x.atanh(),
            Exp   => x.exp(),   Expm1 => x.exp_m1(), Exp2 => x.exp2(),
            Log   => match y {
                Some(base) => x.ln() / base.ln(),
                None       => x.ln(),
            },
            Log10 => x.log10(), Log2 => x.log2(), Log1p => x.ln_1p(),
            Sqrt  => x.sqrt(),  Cbrt => x.cbrt(),  Abs => x.abs(),
            Floor => x.floor(), Ceil => x.ceil(),  Trunc => x.trunc(),
            Degrees => x.to_degrees(),
            Radians => x.to_radians(),
            Erf    => libm::erf(x),
            Erfc   => libm::erfc(x),
            Gamma  => libm::tgamma(x),
            Lgamma => libm::lgamma(x),
            Atan2    => x.atan2(y.unwrap_or(f64::NAN)),
            Pow      => x.powf(y.unwrap_or(f64::NAN)),
            Hypot    => x.hypot(y.unwrap_or(f64::NAN)),
            Copysign => x.copysign(y.unwrap_or(f64::NAN)),
            Fmod     => x % y.unwrap_or(f64::NAN),
            Remainder => libm::remainder(x, y.unwrap_or(f64::NAN)),
            // the exponent must be an integer
            Ldexp => match y {
                Some(n) if n.fract() == 0.0 => libm::ldexp(x, n.clamp(i32::MIN as f64, i32::MAX as f64) as i32),
                _ => f64::NAN,
            },
        }
    }
}
