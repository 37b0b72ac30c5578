//! Rendering of solver runs into reports.
//!
//! ┌ [`MethodRun`] / [`Outcome`] : what the runner hands over, one per method
//! ├ [`Row`] / [`Cell`]          : a record flattened into named columns
//! ├ [`table`]                   : fixed-width text report
//! └ [`spreadsheet`]             : consolidated CSV across all methods

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::root_finding::algorithms::Method;
use crate::root_finding::report::{
    BracketRecord, FixedPointRecord, IterationRecord, IterationSequence, NewtonRecord,
    SecantRecord, TerminationReason, ToleranceSatisfied,
};

pub mod format;
pub mod spreadsheet;
pub mod table;


pub const ITER          : &str = "iter";
pub const METHOD        : &str = "method";
pub const ERRO          : &str = "erro";
pub const ERROR_MESSAGE : &str = "error_message";

pub const TEXT_REPORT_NAME : &str = "results.txt";
pub const CSV_REPORT_NAME  : &str = "results.csv";


#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("cannot write csv report {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}


/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }
}

/// A record flattened into `column → cell`.
pub type Row = BTreeMap<&'static str, Cell>;


/// Flattening of iteration records into report columns.
pub trait ToRow {
    fn to_row(&self) -> Row;
}

fn row<const N: usize>(iter: usize, cols: [(&'static str, f64); N]) -> Row {
    let mut r = Row::new();
    r.insert(ITER, Cell::Int(iter as i64));
    for (name, v) in cols {
        r.insert(name, Cell::Float(v));
    }
    r
}

impl ToRow for BracketRecord {
    fn to_row(&self) -> Row {
        row(self.iter, [("a", self.a), ("b", self.b), ("x", self.x), ("f(x)", self.fx), (ERRO, self.erro)])
    }
}

impl ToRow for FixedPointRecord {
    fn to_row(&self) -> Row {
        row(self.iter, [("x", self.x), ("g(x_prev)", self.gx_prev), (ERRO, self.erro)])
    }
}

impl ToRow for NewtonRecord {
    fn to_row(&self) -> Row {
        row(self.iter, [("x", self.x), ("f(x)", self.fx), ("f'(x)", self.dfx), (ERRO, self.erro)])
    }
}

impl ToRow for SecantRecord {
    fn to_row(&self) -> Row {
        row(self.iter, [
            ("x_{k-1}", self.x_prev),
            ("x_k",     self.x),
            ("x_{k+1}", self.x_next),
            ("f(x_k)",  self.fx),
            (ERRO,      self.erro),
        ])
    }
}


/// A finished solver trace in report form.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub rows        : Vec<Row>,
    pub root        : Option<f64>,
    pub termination : TerminationReason,
    pub tolerance   : ToleranceSatisfied,
}

impl Solution {
    pub fn iterations(&self) -> usize { self.rows.len() }
}

impl<R: IterationRecord + ToRow> From<&IterationSequence<R>> for Solution {
    fn from(seq: &IterationSequence<R>) -> Self {
        Self {
            rows        : seq.records().iter().map(ToRow::to_row).collect(),
            root        : seq.root(),
            termination : seq.termination(),
            tolerance   : seq.tolerance(),
        }
    }
}


/// Result of one method invocation as seen by the reports.
///
/// ├ [`Outcome::Skipped`] : required parameters missing, nothing ran
/// ├ [`Outcome::Solved`]  : the method returned a trace (converged or not)
/// └ [`Outcome::Failed`]  : precondition, numeric, evaluation or input error
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Skipped,
    Solved(Solution),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodRun {
    pub method  : Method,
    pub outcome : Outcome,
}

impl MethodRun {
    /// Rows as rendered: iteration rows, a single `{iter: 0, error_message}`
    /// row for a failure, nothing for a skipped method.
    pub fn rows(&self) -> Vec<Row> {
        match &self.outcome {
            Outcome::Skipped     => Vec::new(),
            Outcome::Solved(sol) => sol.rows.clone(),
            Outcome::Failed(msg) => {
                let mut r = Row::new();
                r.insert(ITER, Cell::Int(0));
                r.insert(ERROR_MESSAGE, Cell::Text(msg.clone()));
                vec![r]
            }
        }
    }
}


/// Paths of the two artefacts written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text : PathBuf,
    pub csv  : PathBuf,
}

/// Writes `results.txt` and `results.csv` into `dir`.
pub fn write_reports(runs: &[MethodRun], dir: &Path) -> Result<ReportPaths, ReportError> {
    let paths = ReportPaths {
        text : dir.join(TEXT_REPORT_NAME),
        csv  : dir.join(CSV_REPORT_NAME),
    };

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| ReportError::Io { path, source }
    };
    let file = File::create(&paths.text).map_err(io_err(&paths.text))?;
    let mut out = BufWriter::new(file);
    out.write_all(table::render_report(runs).as_bytes())
        .and_then(|_| out.flush())
        .map_err(io_err(&paths.text))?;
    info!("wrote {}", paths.text.display());

    let file = File::create(&paths.csv).map_err(io_err(&paths.csv))?;
    spreadsheet::write_csv(runs, file)
        .map_err(|source| ReportError::Csv { path: paths.csv.clone(), source })?;
    info!("wrote {}", paths.csv.display());

    Ok(paths)
}
