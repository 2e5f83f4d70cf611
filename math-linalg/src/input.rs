//! JSON description of a linear system
//!
//! ```json
//! { "layout": "rows", "matrix": [[2.0, 0.0, 4.0], [0.0, 2.0, 6.0]] }
//! ```
//!
//! With `"layout": "columns"` each inner list is a column, the last one being b.

use crate::dense::{matrix_from_columns, matrix_from_rows};
use crate::error::LinalgError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a system description
#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] LinalgError),
}

/// How the nested lists of [`SystemInput::matrix`] are oriented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixLayout {
    /// Each inner list is one equation: coefficients then right-hand side
    #[default]
    Rows,
    /// Each inner list is one column; the last column is the right-hand side
    Columns,
}

/// Augmented system `[A | b]` as read from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInput {
    /// Orientation of `matrix`
    #[serde(default)]
    pub layout: MatrixLayout,
    /// Augmented matrix entries
    pub matrix: Vec<Vec<f64>>,
}

impl SystemInput {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Augmented matrix in `(rows, columns)` form
    pub fn to_augmented(&self) -> Result<Array2<f64>, LinalgError> {
        match self.layout {
            MatrixLayout::Rows => matrix_from_rows(&self.matrix),
            MatrixLayout::Columns => matrix_from_columns(&self.matrix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rows_is_default_layout() {
        let input = SystemInput::from_json(r#"{"matrix": [[2.0, 0.0, 4.0], [0.0, 2.0, 6.0]]}"#)
            .expect("valid JSON");
        assert_eq!(input.layout, MatrixLayout::Rows);
        assert_eq!(
            input.to_augmented().unwrap(),
            array![[2.0, 0.0, 4.0], [0.0, 2.0, 6.0]]
        );
    }

    #[test]
    fn test_columns_layout() {
        let input = SystemInput::from_json(
            r#"{"layout": "columns", "matrix": [[2.0, 0.0], [0.0, 2.0], [4.0, 6.0]]}"#,
        )
        .expect("valid JSON");
        assert_eq!(
            input.to_augmented().unwrap(),
            array![[2.0, 0.0, 4.0], [0.0, 2.0, 6.0]]
        );
    }

    #[test]
    fn test_ragged_rows() {
        let input = SystemInput::from_json(r#"{"matrix": [[1.0, 2.0], [3.0]]}"#).unwrap();
        assert!(input.to_augmented().unwrap_err().is_shape_error());
    }

    #[test]
    fn test_invalid_json() {
        let err = SystemInput::from_json("{ not json").unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SystemInput::from_file(Path::new("/nonexistent/system.json")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
