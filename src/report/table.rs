//! Fixed-width text report.
//!
//! ```text
//! # Root-Finding Results
//!
//! ## Bisection
//! iter | a   | b | x   | ...
//! -----+-----+---+-----+ ...
//!    1 |   0 | 2 |   1 | ...
//!
//! root ≈ 1.414213562 after 21 iteration(s); tolerance reached: |f(x)| < tol
//!
//! ## Newton-Raphson
//! (method not run or no iterations)
//! ```

use std::collections::BTreeSet;

use super::format::{format_g, table_cell, TABLE_PRECISION};
use super::{MethodRun, Outcome, Row, Solution, ITER};
use crate::root_finding::report::{TerminationReason, ToleranceSatisfied};

pub const TITLE   : &str = "# Root-Finding Results";
pub const NOT_RUN : &str = "(method not run or no iterations)";


/// Columns of `rows`: every key present in any row, sorted, with `iter` first.
pub fn columns(rows: &[Row]) -> Vec<&'static str> {
    let keys: BTreeSet<&'static str> = rows.iter().flat_map(|r| r.keys().copied()).collect();
    let mut cols: Vec<&'static str> = Vec::with_capacity(keys.len());
    if keys.contains(ITER) {
        cols.push(ITER);
    }
    cols.extend(keys.into_iter().filter(|k| *k != ITER));
    cols
}


/// Renders `rows` as a table; numbers right-aligned, text left-aligned.
/// Every line, the last included, ends with `\n`.
pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return format!("{NOT_RUN}\n");
    }
    let cols = columns(rows);

    // cell text and alignment, row-major
    let cells: Vec<Vec<(String, bool)>> = rows
        .iter()
        .map(|r| {
            cols.iter()
                .map(|c| match r.get(c) {
                    Some(cell) => (table_cell(cell), cell.is_numeric()),
                    None       => (String::new(), false),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = cols
        .iter()
        .enumerate()
        .map(|(j, c)| {
            cells.iter()
                .map(|row| row[j].0.chars().count())
                .max()
                .unwrap_or(0)
                .max(c.chars().count())
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(
        cols.iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" | "),
    );
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-"));
    for row in &cells {
        lines.push(
            row.iter()
                .zip(&widths)
                .map(|((text, numeric), &w)| {
                    if *numeric { format!("{text:>w$}") } else { format!("{text:<w$}") }
                })
                .collect::<Vec<_>>()
                .join(" | "),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}


/// One-line verdict printed under a completed method's table.
pub fn summary(sol: &Solution) -> String {
    let status = match (sol.termination, sol.tolerance) {
        (TerminationReason::ToleranceReached, ToleranceSatisfied::AbsFxReached)
            => "tolerance reached: |f(x)| < tol",
        (TerminationReason::ToleranceReached, _)
            => "tolerance reached: |Δx| < tol",
        (TerminationReason::IterationLimit, _)
            => "max_iter reached without convergence",
    };
    match sol.root {
        Some(root) => format!(
            "root ≈ {} after {} iteration(s); {status}",
            format_g(root, TABLE_PRECISION),
            sol.iterations(),
        ),
        None => status.to_string(),
    }
}


/// Full text report over all method runs, in run order.
pub fn render_report(runs: &[MethodRun]) -> String {
    let mut out = format!("{TITLE}\n\n");
    for run in runs {
        out.push_str(&format!("## {}\n", run.method.display_name()));
        let rows = run.rows();
        if rows.is_empty() {
            out.push_str(&format!("{NOT_RUN}\n\n"));
            continue;
        }
        out.push_str(&render_table(&rows));
        out.push('\n');
        if let Outcome::Solved(sol) = &run.outcome {
            out.push_str(&summary(sol));
            out.push_str("\n\n");
        }
    }
    out
}
