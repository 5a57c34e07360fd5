use thiserror::Error;

/// Input-contract violations. All are detected before any work begins and
/// are caller-correctable; the library has no internal failure modes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimensions must be at least 1x1 (got {rows}x{columns})")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,

    #[error("search word must not be empty")]
    EmptyWord,

    #[error("all grid rows must have the same length (row {row} has {got} cells, expected {expected})")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },
}
