//! `key=value` input files.
//!
//! ```text
//! # comment
//! function = x^2 - 2
//! a = 0
//! b = 2
//! tol = 1e-6
//! ```
//!
//! ├ blank lines and lines starting with `#` are skipped
//! ├ lines without `=` are skipped
//! ├ split on the first `=`, both sides trimmed
//! └ a repeated key overrides the earlier one

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::errors::InputError;
use super::value::Value;


/// Parameters loaded from an input file, by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, Value>,
}

impl Params {
    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| InputError::Io { path: path.to_path_buf(), source })?;
        let params = Self::parse(&text);
        debug!("loaded {} parameter(s) from {}", params.len(), path.display());
        Ok(params)
    }

    /// Parses the contents of an input file.
    pub fn parse(text: &str) -> Self {
        let values = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), Value::parse(v.trim())))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A numeric parameter; `Ok(None)` when absent.
    pub fn number(&self, key: &str) -> Result<Option<f64>, InputError> {
        match self.values.get(key) {
            None                   => Ok(None),
            Some(Value::Number(v)) => Ok(Some(*v)),
            Some(other)            => Err(wrong_type(key, "number", other)),
        }
    }

    /// An expression parameter; `Ok(None)` when absent.
    ///
    /// A bare number is accepted as the constant expression it spells.
    pub fn expression(&self, key: &str) -> Result<Option<String>, InputError> {
        match self.values.get(key) {
            None                   => Ok(None),
            Some(Value::Text(s))   => Ok(Some(s.clone())),
            Some(Value::Number(v)) => Ok(Some(v.to_string())),
            Some(other)            => Err(wrong_type(key, "expression", other)),
        }
    }
}

impl std::str::FromStr for Params {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn wrong_type(key: &str, expected: &'static str, found: &Value) -> InputError {
    InputError::WrongType {
        key      : key.to_string(),
        expected,
        found    : found.kind(),
        value    : found.to_string(),
    }
}
