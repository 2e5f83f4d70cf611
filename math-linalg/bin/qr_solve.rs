//! Solve a linear system read from JSON with QR decomposition.
//!
//! Usage:
//!     cargo run --bin qr-solve -- system.json --precision 6 -v

use anyhow::Context;
use clap::{ArgAction, Parser};
use math_linalg::{
    DenseOps, LinearAlgebraOps, QrConfig, SystemInput, format_matrix, format_vector,
    qr_decompose_with,
};
use ndarray::Array2;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qr-solve",
    about = "Solve Ax = b by classical Gram-Schmidt QR decomposition"
)]
struct Cli {
    /// JSON file with the augmented matrix [A | b]
    input: PathBuf,

    /// Decimal places in the printed matrices
    #[arg(long, default_value_t = 4)]
    precision: usize,

    /// Relative tolerance below which a column is treated as linearly dependent
    #[arg(long, default_value_t = 1e-10)]
    tolerance: f64,

    /// Warn when Q^T Q deviates from the identity
    #[arg(long)]
    check_orthonormality: bool,

    /// Print a JSON report instead of formatted matrices
    #[arg(long)]
    json: bool,

    /// Log intermediate matrices (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    q: Vec<Vec<f64>>,
    r: Vec<Vec<f64>>,
    x: Vec<f64>,
}

fn rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|row| row.to_vec()).collect()
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let input = SystemInput::from_file(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let augmented = input.to_augmented()?;

    let config = QrConfig {
        degeneracy_tolerance: cli.tolerance,
        check_orthonormality: cli.check_orthonormality,
        verbosity: usize::from(cli.verbose),
        precision: cli.precision,
        ..QrConfig::default()
    };

    let ops = DenseOps;
    let (a, b) = ops.split_augmented(&augmented)?;
    let qr = qr_decompose_with(&ops, &a, &config).context("QR decomposition failed")?;
    let x = qr.solve_with(&ops, &b, &config).context("solve failed")?;

    if cli.json {
        let report = SolveReport {
            q: rows(&qr.q),
            r: rows(&qr.r),
            x: x.to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_matrix(&qr.q, "Q matrix:", cli.precision));
        println!();
        println!("{}", format_matrix(&qr.r, "R matrix:", cli.precision));
        println!();
        println!("{}", format_vector(&x, "Solution x:", cli.precision));
    }

    Ok(())
}
