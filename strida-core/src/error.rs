use thiserror::Error;

/// Custom error type for the Strida tensor library.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum StridaError {
    #[error("Wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Rank mismatch: expected rank {expected}, got {actual} during operation {operation}")]
    RankMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid transpose order: order has {order_len} axes but tensor rank is {rank}")]
    InvalidTransposeOrder { order_len: usize, rank: usize },

    #[error("Invalid axis {axis} in order for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("Duplicate axis {axis} in order")]
    DuplicateAxis { axis: usize },

    #[error("Linear system has no solution")]
    NoSolution,

    #[error("Linear system has infinitely many solutions: rank {rank} < {unknowns} unknowns")]
    InfinitelyMany { rank: usize, unknowns: usize },

    /// Back-substitution met a negligible diagonal although the rank checks passed.
    /// This is a defect in rank detection, not a property of the input system.
    #[error("Zero pivot on row {row}")]
    ZeroPivot { row: usize },

    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflow { operation: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Converts a fallible result into a value, aborting loudly on error.
///
/// Reserved for call sites that have already proven the precondition holds
/// (e.g. an index known to be in range). Anywhere else it is a caller bug.
pub trait Must<T> {
    fn must(self, operation: &str) -> T;
}

impl<T> Must<T> for Result<T, StridaError> {
    #[track_caller]
    fn must(self, operation: &str) -> T {
        self.unwrap_or_else(|e| panic!("{} failed: {}", operation, e))
    }
}
