// src/decomposition/mod.rs

//! In-place Pauli decomposition and reconstruction of dense matrices.
//!
//! A `dim x dim` complex matrix `M` with `dim = 2^n` expands uniquely over
//! the n-fold tensor-product Pauli basis,
//! `M = sum_P c_P * P`, with `c_P = Tr(P * M) / dim`.
//!
//! [`pauli_coefficients`] computes all `dim * dim` coefficients in place in
//! `O(dim^2 log dim)` time with `O(1)` auxiliary space, by composing three
//! row-local passes:
//!
//! 1. an involutive XOR-indexed permutation that pre-conditions the matrix,
//! 2. a fast Hadamard-Walsh butterfly applied to each row,
//! 3. a phase and normalisation pass through the shared table in
//!    [`crate::core::pauli`].
//!
//! [`inverse_pauli_decomposition`] runs the same passes in reverse order
//! (with conjugate phases) and restores the original matrix exactly, up to
//! floating-point rounding.
//!
//! All buffers are caller-owned, contiguous, and row-major. The only
//! allocation in this module is the scratch buffer of
//! [`pauli_coefficients_lexicographic`], which never outlives its call.

use num_complex::Complex;

use crate::core::error::PauliLcuError;
use crate::core::index::lex_index;
use crate::core::pauli::{conjugate_phase_factor, phase_exponent, phase_factor};
use crate::validation;

/// Overwrites `data` with the Pauli coefficients of the matrix it holds,
/// in symplectic order.
///
/// After the call, the entry at flat offset `i * dim + j` is the coefficient
/// of the Pauli operator whose lexicographic index is
/// [`lex_index`]`(i, j)`, i.e. `c = Tr(P * M) / dim`.
///
/// # Arguments
/// * `dim` - Matrix dimension, must be a power of two (`2^n` for `n` qubits).
/// * `data` - Row-major `dim * dim` complex buffer holding the matrix.
///
/// # Returns
/// * `Ok(())` with `data` overwritten by the coefficients.
/// * `Err(PauliLcuError)` if `dim` is not a power of two or `data` is not
///   exactly `dim * dim` entries long; `data` is untouched on error.
pub fn pauli_coefficients(dim: usize, data: &mut [Complex<f64>]) -> Result<(), PauliLcuError> {
    validation::check_dimension(dim)?;
    validation::check_matrix_buffer(dim, data.len())?;
    coefficients_kernel(dim, data);
    Ok(())
}

/// Restores the matrix whose Pauli coefficients (in symplectic order, as
/// produced by [`pauli_coefficients`]) are stored in `data`.
///
/// Exact algebraic inverse of the forward transform: conjugate phases, then
/// the self-inverse butterfly, then the self-inverse XOR permutation. The
/// forward pass already divided by `dim`, so no rescaling happens here;
/// round trips must pair one forward call with one inverse call.
///
/// # Arguments
/// * `dim` - Matrix dimension, must be a power of two.
/// * `data` - Row-major `dim * dim` coefficient buffer.
///
/// # Returns
/// * `Ok(())` with `data` overwritten by the reconstructed matrix.
/// * `Err(PauliLcuError)` on a dimension or buffer-length violation;
///   `data` is untouched on error.
pub fn inverse_pauli_decomposition(
    dim: usize,
    data: &mut [Complex<f64>],
) -> Result<(), PauliLcuError> {
    validation::check_dimension(dim)?;
    validation::check_matrix_buffer(dim, data.len())?;
    for (row, entries) in data.chunks_exact_mut(dim).enumerate() {
        for (col, entry) in entries.iter_mut().enumerate() {
            *entry *= conjugate_phase_factor(phase_exponent(col, row));
        }
        hadamard_row(entries);
    }
    xor_permute(dim, data);
    Ok(())
}

/// Overwrites `data` with Pauli coefficients in lexicographic order, where
/// the flat index directly spells out the Pauli string (`II`, `IX`, `IY`,
/// `IZ`, `XI`, ... for two qubits).
///
/// The reindexing composed with the transform is not an in-place
/// permutation, so this variant runs the forward kernel in a scratch copy
/// and scatters entry `(i, j)` to flat index [`lex_index`]`(i, j)`. It is
/// the one operation with `O(dim^2)` auxiliary space; the scratch buffer is
/// released before returning on every path.
///
/// # Arguments
/// * `num_qubits` - Number of qubits `n`; the matrix dimension is `2^n`.
/// * `data` - Row-major `2^n * 2^n` complex buffer holding the matrix.
///
/// # Returns
/// * `Ok(())` with `data` overwritten by lexicographically ordered
///   coefficients.
/// * `Err(PauliLcuError)` on a precondition violation or if the scratch
///   buffer cannot be allocated. Either the whole conversion succeeds or
///   `data` is left untouched.
pub fn pauli_coefficients_lexicographic(
    num_qubits: u32,
    data: &mut [Complex<f64>],
) -> Result<(), PauliLcuError> {
    let dim = validation::check_qubit_count(num_qubits)?;
    validation::check_matrix_buffer(dim, data.len())?;

    let mut scratch: Vec<Complex<f64>> = Vec::new();
    scratch.try_reserve_exact(data.len()).map_err(|_| PauliLcuError::ScratchAllocation {
        bytes: data.len() * std::mem::size_of::<Complex<f64>>(),
    })?;
    scratch.extend_from_slice(data);

    coefficients_kernel(dim, &mut scratch);

    for i in 0..dim {
        for j in 0..dim {
            let id = lex_index(i as u32, j as u32) as usize;
            data[id] = scratch[i * dim + j];
        }
    }
    Ok(())
}

/// Forward transform plus simultaneous emission of the symplectic X-bit,
/// Z-bit, and phase-exponent arrays describing each coefficient's Pauli
/// operator.
///
/// For the coefficient at flat position `p = i * dim + j`:
/// * `phase[p]` is [`phase_exponent`]`(i, j)`, so the operator is
///   `(-i)^phase[p] * Z^z * X^x`;
/// * `x[p * n + k]` is bit `k` of the row index `i`;
/// * `z[p * n + k]` is bit `k` of the column index `j`.
///
/// This matches the symplectic Pauli encodings used by common quantum SDKs.
///
/// # Arguments
/// * `num_qubits` - Number of qubits `n`.
/// * `data` - Row-major `2^n * 2^n` complex buffer holding the matrix.
/// * `x` - Output array of `dim * dim * n` X-presence bits.
/// * `z` - Output array of `dim * dim * n` Z-presence bits.
/// * `phase` - Output array of `dim * dim` phase exponents in `[0, 4)`.
///
/// # Returns
/// * `Ok(())` with `data` decomposed and the three arrays filled.
/// * `Err(PauliLcuError)` if any buffer length is wrong; all buffers are
///   untouched on error.
pub fn pauli_coefficients_xz_phase(
    num_qubits: u32,
    data: &mut [Complex<f64>],
    x: &mut [u8],
    z: &mut [u8],
    phase: &mut [u8],
) -> Result<(), PauliLcuError> {
    let dim = validation::check_qubit_count(num_qubits)?;
    validation::check_matrix_buffer(dim, data.len())?;
    validation::check_encoding_buffers(num_qubits, x.len(), z.len(), phase.len())?;

    coefficients_kernel(dim, data);

    let n = num_qubits as usize;
    for i in 0..dim {
        for j in 0..dim {
            let p = i * dim + j;
            phase[p] = phase_exponent(i, j);
            for k in 0..n {
                x[p * n + k] = ((i >> k) & 1) as u8;
                z[p * n + k] = ((j >> k) & 1) as u8;
            }
        }
    }
    Ok(())
}

/// The unchecked forward kernel shared by all decomposition entry points.
/// Callers must have validated `dim` and the buffer length.
pub(crate) fn coefficients_kernel(dim: usize, data: &mut [Complex<f64>]) {
    xor_permute(dim, data);
    let scale = 1.0 / dim as f64;
    for (row, entries) in data.chunks_exact_mut(dim).enumerate() {
        hadamard_row(entries);
        for (col, entry) in entries.iter_mut().enumerate() {
            *entry *= phase_factor(phase_exponent(col, row)) * scale;
        }
    }
}

/// Involutive XOR-indexed permutation of the flattened buffer: for every
/// column `j` and row `i < j`, swaps entries `(i, i ^ j)` and `(j, i ^ j)`.
/// Each unordered pair is visited exactly once, so applying the permutation
/// twice is the identity.
fn xor_permute(dim: usize, data: &mut [Complex<f64>]) {
    for j in 1..dim {
        for i in 0..j {
            data.swap(i * dim + (i ^ j), j * dim + (i ^ j));
        }
    }
}

/// In-place fast Hadamard-Walsh transform of one row: the classic butterfly
/// with block size doubling from 1 up to the row length, `O(dim log dim)`.
/// Self-inverse up to a factor of the row length.
fn hadamard_row(row: &mut [Complex<f64>]) {
    let mut hf = 1;
    while hf < row.len() {
        for block in row.chunks_exact_mut(2 * hf) {
            let (lower, upper) = block.split_at_mut(hf);
            for (a, b) in lower.iter_mut().zip(upper.iter_mut()) {
                let v = *b;
                *b = *a - v;
                *a += v;
            }
        }
        hf *= 2;
    }
}
