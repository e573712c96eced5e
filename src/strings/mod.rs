// src/strings/mod.rs

//! Rendering of coefficient indices as human-readable Pauli strings.
//!
//! A Pauli string has one character per qubit, most-significant qubit
//! first. All rendering goes through the canonical code table in
//! [`crate::core::pauli`], so strings, lexicographic indices, and the
//! X/Z/phase encoding always agree.

use crate::core::error::PauliLcuError;
use crate::core::index::lex_index;
use crate::core::pauli::Pauli;
use crate::validation;

/// Renders the Pauli string of a lexicographic coefficient index.
///
/// Bit pairs of `id` are read from most significant to least significant
/// and decoded through the canonical table, producing exactly `num_qubits`
/// characters. For two qubits, `0b0110` renders as `"XY"`.
pub fn pauli_string_lexicographic(id: u64, num_qubits: u32) -> String {
    let mut out = String::with_capacity(num_qubits as usize);
    for qubit in (0..num_qubits).rev() {
        let code = ((id >> (2 * qubit)) & 0b11) as u8;
        out.push(Pauli::from_code(code).as_char());
    }
    out
}

/// Renders the Pauli string of the coefficient at matrix position
/// (row `i`, column `j`), as addressed by
/// [`pauli_coefficients`](crate::decomposition::pauli_coefficients).
pub fn pauli_string_ij(i: u32, j: u32, num_qubits: u32) -> String {
    pauli_string_lexicographic(lex_index(i, j), num_qubits)
}

/// Returns all `dim * dim` Pauli strings in symplectic row-major order,
/// aligned entry-for-entry with the coefficient buffer produced by
/// [`pauli_coefficients`](crate::decomposition::pauli_coefficients).
///
/// # Arguments
/// * `num_qubits` - Number of qubits `n`; the grid holds `4^n` strings.
///
/// # Returns
/// * `Ok(strings)` with `strings[i * dim + j] == pauli_string_ij(i, j, n)`.
/// * `Err(PauliLcuError::QubitOverflow)` if the grid cannot be indexed.
pub fn pauli_strings(num_qubits: u32) -> Result<Vec<String>, PauliLcuError> {
    let dim = validation::check_qubit_count(num_qubits)?;
    let mut out = Vec::with_capacity(dim * dim);
    for i in 0..dim {
        for j in 0..dim {
            out.push(pauli_string_ij(i as u32, j as u32, num_qubits));
        }
    }
    Ok(out)
}
