//! Plain-text rendering of matrices and vectors for logs and the CLI

use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Render `m` under `title`, one row per line, with `precision` decimals.
///
/// Entries are right-aligned to a common width so columns line up.
pub fn format_matrix<T: RealField>(m: &Array2<T>, title: &str, precision: usize) -> String {
    let cells: Vec<Vec<String>> = m
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|v| format!("{v:.precision$}")).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut out = String::from(title);
    for row in &cells {
        out.push('\n');
        let line: Vec<String> = row.iter().map(|cell| format!("{cell:>width$}")).collect();
        out.push_str(&line.join("  "));
    }
    out
}

/// Render `v` under `title` on a single line.
pub fn format_vector<T: RealField>(v: &Array1<T>, title: &str, precision: usize) -> String {
    let entries: Vec<String> = v.iter().map(|x| format!("{x:.precision$}")).collect();
    format!("{title}\n[{}]", entries.join(", "))
}
