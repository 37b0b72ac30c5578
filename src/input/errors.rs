use std::path::PathBuf;
use thiserror::Error;


/// Input file and parameter errors.
///
/// ┌ Io          : the file could not be read
/// ├ Missing     : a required parameter is absent
/// ├ WrongType   : a parameter has the wrong kind of value (e.g. `a=abc`)
/// ├ InvalidTol  : `tol` is not finite and > 0
/// └ InvalidMaxIter : `max_iter` is not a positive integer
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input file {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("missing parameter `{key}`")]
    Missing { key: String },

    #[error("parameter `{key}` must be a {expected}, got {found} '{value}'")]
    WrongType { key: String, expected: &'static str, found: &'static str, value: String },

    #[error("parameter `tol` must be finite and > 0, got {got}")]
    InvalidTol { got: f64 },

    #[error("parameter `max_iter` must be a positive integer, got {got}")]
    InvalidMaxIter { got: f64 },
}
