use crate::autograd::Op;
use thiserror::Error;

/// Custom error type for the napagrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NapagradError {
    #[error("Malformed node: operation {op:?} expects {expected} operand(s), got {actual}")]
    MalformedNode {
        op: Op,
        expected: usize,
        actual: usize,
    },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Input size mismatch in {operation}: expected {expected}, got {actual}")]
    InputSizeMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Expected a single scalar output, but the network produces {outputs}")]
    NonScalarOutput { outputs: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Parameter `{0}` is missing from the state dict")]
    MissingParameter(String),

    #[error("I/O error: {0}")]
    Io(String),
}
