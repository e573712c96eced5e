// src/core/error.rs

//! Error handling logic

use std::fmt;

/// Error types for precondition violations and resource failures in the
/// decomposition API.
///
/// The numeric kernels themselves never validate (they are the hot path);
/// every public entry point checks its contract up front and returns one of
/// these variants instead of proceeding into undefined behaviour.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum PauliLcuError {
    /// The matrix dimension is not a power of two (or is zero).
    /// The Pauli basis only spans `2^n x 2^n` matrices.
    InvalidDimension {
        /// The rejected dimension
        dim: usize,
    },

    /// The matrix buffer does not hold exactly `dim * dim` entries.
    BufferMismatch {
        /// Required number of complex entries (`dim * dim`)
        expected: usize,
        /// Length of the buffer actually supplied
        actual: usize,
    },

    /// One of the X-bit, Z-bit, or phase-exponent output arrays has the
    /// wrong length for the requested qubit count.
    EncodingMismatch {
        /// Which of the three arrays is mismatched ("x", "z", or "phase")
        field: &'static str,
        /// Required array length
        expected: usize,
        /// Length of the array actually supplied
        actual: usize,
    },

    /// The qubit count would overflow the index types (row and column
    /// indices are 32-bit, interleaved indices 64-bit).
    QubitOverflow {
        /// The rejected qubit count
        num_qubits: u32,
    },

    /// The scratch buffer needed by the lexicographic reordering could not
    /// be allocated. The destination buffer is left untouched.
    ScratchAllocation {
        /// Size of the failed allocation in bytes
        bytes: usize,
    },
}

impl fmt::Display for PauliLcuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PauliLcuError::InvalidDimension { dim } => {
                write!(f, "Invalid Dimension: {} is not a power of two", dim)
            }
            PauliLcuError::BufferMismatch { expected, actual } => {
                write!(f, "Buffer Mismatch: matrix buffer holds {} entries, expected {}", actual, expected)
            }
            PauliLcuError::EncodingMismatch { field, expected, actual } => {
                write!(f, "Encoding Mismatch: '{}' array holds {} entries, expected {}", field, actual, expected)
            }
            PauliLcuError::QubitOverflow { num_qubits } => {
                write!(f, "Qubit Overflow: {} qubits exceeds the supported index width", num_qubits)
            }
            PauliLcuError::ScratchAllocation { bytes } => {
                write!(f, "Scratch Allocation: failed to allocate {} bytes for reordering", bytes)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for PauliLcuError {}
