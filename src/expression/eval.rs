//! [`Expression`]: a parsed, immutable function of `x`.

use super::errors::{EvalFailure, EvaluationError, ParseError};
use super::parser::{parse, BinaryOp, Node};


/// A univariate real function parsed from text.
///
/// Parsing happens once in [`Expression::parse`]; [`Expression::eval`] walks
/// the tree with `x` bound and has no side effects, so the same input always
/// yields the same output.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source : String,
    root   : Node,
}

impl Expression {
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let root = parse(src)?;
        Ok(Self { source: src.to_string(), root })
    }

    /// Original text of the expression.
    pub fn source(&self) -> &str { &self.source }

    /// Parsed tree.
    pub fn tree(&self) -> &Node { &self.root }

    /// Evaluates at `x`. Every result is finite; anything else is an error.
    pub fn eval(&self, x: f64) -> Result<f64, EvaluationError> {
        let value = eval_node(&self.root, x).map_err(|cause| self.failure(x, cause))?;
        if !value.is_finite() {
            return Err(self.failure(x, EvalFailure::NonFinite { value }));
        }
        Ok(value)
    }

    /// Borrows the expression as the evaluation capability the solvers take.
    pub fn as_fn(&self) -> impl FnMut(f64) -> Result<f64, EvaluationError> + '_ {
        move |x| self.eval(x)
    }

    fn failure(&self, x: f64, cause: EvalFailure) -> EvaluationError {
        EvaluationError { expression: self.source.clone(), x, cause }
    }
}

impl std::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}


fn eval_node(node: &Node, x: f64) -> Result<f64, EvalFailure> {
    match node {
        Node::Number(v) => Ok(*v),
        Node::Variable  => Ok(x),
        Node::Neg(inner) => Ok(-eval_node(inner, x)?),
        Node::Binary { op, lhs, rhs } => {
            let l = eval_node(lhs, x)?;
            let r = eval_node(rhs, x)?;
            binary(*op, l, r)
        }
        Node::Call { func, args } => {
            let values = args
                .iter()
                .map(|a| eval_node(a, x))
                .collect::<Result<Vec<_>, _>>()?;
            let out = func.apply(&values);
            if out.is_nan() {
                return Err(EvalFailure::Domain { function: func.name() });
            }
            // overflow or a pole from finite arguments
            if out.is_infinite() && values.iter().all(|v| v.is_finite()) {
                return Err(EvalFailure::NonFinite { value: out });
            }
            Ok(out)
        }
    }
}

fn binary(op: BinaryOp, l: f64, r: f64) -> Result<f64, EvalFailure> {
    let out = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => {
            if r == 0.0 { return Err(EvalFailure::DivisionByZero); }
            l / r
        }
        BinaryOp::FloorDiv => {
            if r == 0.0 { return Err(EvalFailure::DivisionByZero); }
            (l / r).floor()
        }
        // floored remainder: sign follows the divisor
        BinaryOp::Rem => {
            if r == 0.0 { return Err(EvalFailure::DivisionByZero); }
            l - r * (l / r).floor()
        }
        BinaryOp::Pow => {
            if l == 0.0 && r < 0.0 { return Err(EvalFailure::DivisionByZero); }
            let out = l.powf(r);
            if out.is_infinite() && l.is_finite() && r.is_finite() {
                return Err(EvalFailure::NonFinite { value: out });
            }
            out
        }
    };
    if out.is_nan() {
        return Err(EvalFailure::NonFinite { value: out });
    }
    Ok(out)
}
