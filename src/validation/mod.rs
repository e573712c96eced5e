// src/validation/mod.rs

//! Fail-fast precondition checks for the public decomposition API.
//!
//! The numeric kernels assume a power-of-two dimension and correctly sized
//! buffers and perform no checking of their own. These functions are run by
//! every public entry point before a kernel is dispatched, so a contract
//! violation surfaces as a descriptive [`PauliLcuError`] instead of
//! corrupting the caller's buffer.

use crate::core::PauliLcuError;

// Row and column indices are interleaved into a u64, two bits per qubit.
const MAX_QUBITS: u32 = 32;

/// Checks that `dim` is a power of two and returns the corresponding qubit
/// count `n` with `dim == 2^n`.
///
/// # Arguments
/// * `dim` - The matrix dimension to check.
///
/// # Returns
/// * `Ok(n)` if `dim == 2^n`.
/// * `Err(PauliLcuError::InvalidDimension)` otherwise (including `dim == 0`).
pub fn check_dimension(dim: usize) -> Result<u32, PauliLcuError> {
    if dim == 0 || !dim.is_power_of_two() {
        return Err(PauliLcuError::InvalidDimension { dim });
    }
    Ok(dim.trailing_zeros())
}

/// Checks that a qubit count fits the crate's index types and returns the
/// matrix dimension `2^num_qubits`.
///
/// # Arguments
/// * `num_qubits` - The number of qubits.
///
/// # Returns
/// * `Ok(dim)` with `dim == 2^num_qubits`.
/// * `Err(PauliLcuError::QubitOverflow)` if the dimension cannot be indexed.
pub fn check_qubit_count(num_qubits: u32) -> Result<usize, PauliLcuError> {
    if num_qubits >= MAX_QUBITS {
        return Err(PauliLcuError::QubitOverflow { num_qubits });
    }
    1usize
        .checked_shl(num_qubits)
        .ok_or(PauliLcuError::QubitOverflow { num_qubits })
}

/// Checks that a matrix buffer holds exactly `dim * dim` entries.
///
/// # Arguments
/// * `dim` - The matrix dimension.
/// * `len` - Length of the supplied buffer.
///
/// # Returns
/// * `Ok(())` if the buffer covers the full matrix.
/// * `Err(PauliLcuError::BufferMismatch)` otherwise.
pub fn check_matrix_buffer(dim: usize, len: usize) -> Result<(), PauliLcuError> {
    let expected = dim * dim;
    if len != expected {
        return Err(PauliLcuError::BufferMismatch { expected, actual: len });
    }
    Ok(())
}

/// Checks the lengths of the three parallel output arrays of the X/Z/phase
/// encoding: `dim * dim * num_qubits` bits for X and Z, `dim * dim` phase
/// exponents.
///
/// # Returns
/// * `Ok(())` if all three lengths match.
/// * `Err(PauliLcuError::EncodingMismatch)` naming the first mismatched array.
pub fn check_encoding_buffers(
    num_qubits: u32,
    x_len: usize,
    z_len: usize,
    phase_len: usize,
) -> Result<(), PauliLcuError> {
    let dim = check_qubit_count(num_qubits)?;
    let entries = dim * dim;
    let bits = entries * num_qubits as usize;
    if x_len != bits {
        return Err(PauliLcuError::EncodingMismatch { field: "x", expected: bits, actual: x_len });
    }
    if z_len != bits {
        return Err(PauliLcuError::EncodingMismatch { field: "z", expected: bits, actual: z_len });
    }
    if phase_len != entries {
        return Err(PauliLcuError::EncodingMismatch {
            field: "phase",
            expected: entries,
            actual: phase_len,
        });
    }
    Ok(())
}
