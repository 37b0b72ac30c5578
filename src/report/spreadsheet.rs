//! Consolidated CSV of every iteration of every method.
//!
//! Header: `iter`, `method`, then every other column of any method, sorted.
//! Each row is one iteration (or one error row) tagged with its method's
//! display name; columns the method does not produce are left empty.

use std::collections::BTreeSet;
use std::io::Write;

use super::format::csv_cell;
use super::{MethodRun, ITER, METHOD};


/// Header of the consolidated file for `runs`.
pub fn header(runs: &[MethodRun]) -> Vec<&'static str> {
    let rest: BTreeSet<&'static str> = runs
        .iter()
        .flat_map(|run| run.rows())
        .flat_map(|row| row.into_keys())
        .filter(|k| *k != ITER && *k != METHOD)
        .collect();

    let mut cols = vec![ITER, METHOD];
    cols.extend(rest);
    cols
}


/// Writes the consolidated CSV for `runs` to `writer`.
pub fn write_csv<W: Write>(runs: &[MethodRun], writer: W) -> Result<(), csv::Error> {
    let cols = header(runs);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&cols)?;

    for run in runs {
        let name = run.method.display_name();
        for row in run.rows() {
            let record = cols.iter().map(|c| match *c {
                METHOD => name.to_string(),
                col    => row.get(col).map(csv_cell).unwrap_or_default(),
            });
            wtr.write_record(record)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
