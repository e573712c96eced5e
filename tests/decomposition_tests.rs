// tests/decomposition_tests.rs

// Import necessary items from the pauli_lcu crate
use num_complex::Complex;
use num_traits::Zero;
use pauli_lcu::{
    PauliLcuError, inverse_pauli_decomposition, lex_index, pauli_coefficients,
    pauli_coefficients_lexicographic, pauli_coefficients_xz_phase, pauli_string_lexicographic,
    pauli_strings, phase_exponent, phase_factor,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const TOLERANCE: f64 = 1e-9;

// Helper to build a complex number tersely
fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

// Helper producing a deterministic random dim x dim matrix
fn random_matrix(dim: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..dim * dim)
        .map(|_| c(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
        .collect()
}

// Helper asserting two buffers agree entry-wise within TOLERANCE
fn assert_buffers_close(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
    assert_eq!(actual.len(), expected.len(), "Buffer length mismatch for {}", context);
    for (k, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).norm() < TOLERANCE,
            "Entry {} mismatch for {}: got {}, expected {}",
            k,
            context,
            a,
            e
        );
    }
}

// The four single-qubit Pauli matrices, row-major
fn single_pauli(label: char) -> Vec<Complex<f64>> {
    match label {
        'I' => vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
        'X' => vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        'Y' => vec![c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)],
        'Z' => vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)],
        _ => panic!("Unknown Pauli label '{}'", label),
    }
}

// Kronecker product of two square row-major matrices
fn kron(
    a: &[Complex<f64>],
    a_dim: usize,
    b: &[Complex<f64>],
    b_dim: usize,
) -> Vec<Complex<f64>> {
    let dim = a_dim * b_dim;
    let mut out = vec![c(0.0, 0.0); dim * dim];
    for ar in 0..a_dim {
        for ac in 0..a_dim {
            for br in 0..b_dim {
                for bc in 0..b_dim {
                    out[(ar * b_dim + br) * dim + (ac * b_dim + bc)] =
                        a[ar * a_dim + ac] * b[br * b_dim + bc];
                }
            }
        }
    }
    out
}

// Builds the full matrix of a Pauli string, most-significant qubit first
fn pauli_string_as_matrix(string: &str) -> Vec<Complex<f64>> {
    let mut matrix = vec![c(1.0, 0.0)];
    let mut dim = 1;
    for label in string.chars() {
        matrix = kron(&matrix, dim, &single_pauli(label), 2);
        dim *= 2;
    }
    matrix
}

#[test]
fn test_round_trip_random() -> Result<(), PauliLcuError> {
    for n in 0..=4u32 {
        let dim = 1usize << n;
        let original = random_matrix(dim, 17 + n as u64);
        let mut matrix = original.clone();

        pauli_coefficients(dim, &mut matrix)?;
        inverse_pauli_decomposition(dim, &mut matrix)?;

        assert_buffers_close(&matrix, &original, &format!("round trip, {} qubits", n));
    }
    Ok(())
}

#[test]
fn test_round_trip_identity_and_zero() -> Result<(), PauliLcuError> {
    for n in 0..=4u32 {
        let dim = 1usize << n;

        let mut identity = vec![Complex::zero(); dim * dim];
        for k in 0..dim {
            identity[k * dim + k] = c(1.0, 0.0);
        }
        let expected = identity.clone();
        pauli_coefficients(dim, &mut identity)?;
        inverse_pauli_decomposition(dim, &mut identity)?;
        assert_buffers_close(&identity, &expected, &format!("identity, {} qubits", n));

        let mut zero = vec![Complex::zero(); dim * dim];
        pauli_coefficients(dim, &mut zero)?;
        assert_buffers_close(&zero, &vec![Complex::zero(); dim * dim], "decomposed zero matrix");
        inverse_pauli_decomposition(dim, &mut zero)?;
        assert_buffers_close(&zero, &vec![Complex::zero(); dim * dim], "restored zero matrix");
    }
    Ok(())
}

#[test]
fn test_single_qubit_known_cases() -> Result<(), PauliLcuError> {
    let strings = pauli_strings(1)?;
    for label in ['I', 'X', 'Y', 'Z'] {
        // Symplectic order: the whole weight sits at the grid position
        // whose string matches the decomposed Pauli matrix.
        let mut matrix = single_pauli(label);
        pauli_coefficients(2, &mut matrix)?;
        for (string, coefficient) in strings.iter().zip(&matrix) {
            let expected = if string.as_bytes()[0] as char == label { 1.0 } else { 0.0 };
            assert!(
                (coefficient - c(expected, 0.0)).norm() < TOLERANCE,
                "Pauli {} has coefficient {} at position {}",
                label,
                coefficient,
                string
            );
        }

        // Lexicographic order: the flat index is the 2-bit code of the axis.
        let mut matrix = single_pauli(label);
        pauli_coefficients_lexicographic(1, &mut matrix)?;
        for (id, coefficient) in matrix.iter().enumerate() {
            let expected =
                if pauli_string_lexicographic(id as u64, 1) == label.to_string() { 1.0 } else { 0.0 };
            assert!(
                (coefficient - c(expected, 0.0)).norm() < TOLERANCE,
                "Pauli {} has coefficient {} at lexicographic index {}",
                label,
                coefficient,
                id
            );
        }
    }
    Ok(())
}

#[test]
fn test_resynthesis_symplectic() -> Result<(), PauliLcuError> {
    for n in 1..=3u32 {
        let dim = 1usize << n;
        let original = random_matrix(dim, 101 + n as u64);
        let mut matrix = original.clone();

        pauli_coefficients(dim, &mut matrix)?;
        let strings = pauli_strings(n)?;

        // Rebuild the matrix as sum of coefficient * Pauli string matrix.
        let mut rebuilt = vec![c(0.0, 0.0); dim * dim];
        for (string, coefficient) in strings.iter().zip(&matrix) {
            for (entry, pauli_entry) in rebuilt.iter_mut().zip(pauli_string_as_matrix(string)) {
                *entry += coefficient * pauli_entry;
            }
        }
        assert_buffers_close(&rebuilt, &original, &format!("resynthesis, {} qubits", n));
    }
    Ok(())
}

#[test]
fn test_resynthesis_lexicographic() -> Result<(), PauliLcuError> {
    for n in 1..=3u32 {
        let dim = 1usize << n;
        let original = random_matrix(dim, 211 + n as u64);
        let mut matrix = original.clone();

        pauli_coefficients_lexicographic(n, &mut matrix)?;

        let mut rebuilt = vec![c(0.0, 0.0); dim * dim];
        for (id, coefficient) in matrix.iter().enumerate() {
            let string = pauli_string_lexicographic(id as u64, n);
            for (entry, pauli_entry) in rebuilt.iter_mut().zip(pauli_string_as_matrix(&string)) {
                *entry += coefficient * pauli_entry;
            }
        }
        assert_buffers_close(&rebuilt, &original, &format!("lexicographic resynthesis, {} qubits", n));
    }
    Ok(())
}

#[test]
fn test_lexicographic_matches_symplectic() -> Result<(), PauliLcuError> {
    for n in 0..=4u32 {
        let dim = 1usize << n;
        let original = random_matrix(dim, 307 + n as u64);

        let mut symplectic = original.clone();
        pauli_coefficients(dim, &mut symplectic)?;

        let mut lexicographic = original.clone();
        pauli_coefficients_lexicographic(n, &mut lexicographic)?;

        for i in 0..dim {
            for j in 0..dim {
                let id = lex_index(i as u32, j as u32) as usize;
                assert_eq!(
                    lexicographic[id],
                    symplectic[i * dim + j],
                    "Coefficient ({}, {}) disagrees with lexicographic index {}",
                    i,
                    j,
                    id
                );
            }
        }
    }
    Ok(())
}

#[test]
fn test_xz_phase_encoding() -> Result<(), PauliLcuError> {
    for n in 1..=3u32 {
        let dim = 1usize << n;
        let nq = n as usize;
        let original = random_matrix(dim, 401 + n as u64);
        let mut matrix = original.clone();

        let mut x = vec![0u8; dim * dim * nq];
        let mut z = vec![0u8; dim * dim * nq];
        let mut phase = vec![0u8; dim * dim];
        pauli_coefficients_xz_phase(n, &mut matrix, &mut x, &mut z, &mut phase)?;

        // The coefficients themselves must match the plain forward transform.
        let mut reference = original.clone();
        pauli_coefficients(dim, &mut reference)?;
        assert_buffers_close(&matrix, &reference, "coefficients from xz_phase");

        let mut rebuilt = vec![c(0.0, 0.0); dim * dim];
        for i in 0..dim {
            for j in 0..dim {
                let p = i * dim + j;
                assert_eq!(phase[p], phase_exponent(i, j), "Phase exponent at ({}, {})", i, j);
                for k in 0..nq {
                    assert_eq!(x[p * nq + k], ((i >> k) & 1) as u8, "X bit {} at ({}, {})", k, i, j);
                    assert_eq!(z[p * nq + k], ((j >> k) & 1) as u8, "Z bit {} at ({}, {})", k, i, j);
                }

                // Rebuild the operator as (-i)^phase * kron of Z^z X^x per
                // qubit, most-significant qubit first, and accumulate.
                let mut operator = vec![c(1.0, 0.0)];
                let mut op_dim = 1;
                for k in (0..nq).rev() {
                    let mut factor = single_pauli('I');
                    if z[p * nq + k] == 1 {
                        factor = matmul2(&single_pauli('Z'), &factor);
                    }
                    if x[p * nq + k] == 1 {
                        factor = matmul2(&factor, &single_pauli('X'));
                    }
                    operator = kron(&operator, op_dim, &factor, 2);
                    op_dim *= 2;
                }
                let weight = matrix[p] * phase_factor(phase[p]);
                for (entry, op_entry) in rebuilt.iter_mut().zip(&operator) {
                    *entry += weight * op_entry;
                }
            }
        }
        assert_buffers_close(&rebuilt, &original, &format!("xz_phase resynthesis, {} qubits", n));
    }
    Ok(())
}

// 2x2 row-major matrix product, used to form Z^z * X^x factors
fn matmul2(a: &[Complex<f64>], b: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut out = vec![c(0.0, 0.0); 4];
    for r in 0..2 {
        for col in 0..2 {
            out[r * 2 + col] = a[r * 2] * b[col] + a[r * 2 + 1] * b[2 + col];
        }
    }
    out
}

#[test]
fn test_invalid_dimension_rejected() {
    let mut data = vec![c(0.0, 0.0); 9];
    let result = pauli_coefficients(3, &mut data);
    assert_eq!(result, Err(PauliLcuError::InvalidDimension { dim: 3 }));

    let result = inverse_pauli_decomposition(0, &mut data);
    assert_eq!(result, Err(PauliLcuError::InvalidDimension { dim: 0 }));
}

#[test]
fn test_buffer_mismatch_rejected() {
    let mut data = vec![c(0.0, 0.0); 3];
    let result = pauli_coefficients(2, &mut data);
    assert_eq!(result, Err(PauliLcuError::BufferMismatch { expected: 4, actual: 3 }));
}

#[test]
fn test_encoding_mismatch_rejected() {
    let dim = 4usize;
    let mut data = random_matrix(dim, 999);
    let untouched = data.clone();
    let mut x = vec![0u8; dim * dim * 2];
    let mut z = vec![0u8; dim * dim * 2 - 1]; // short by one
    let mut phase = vec![0u8; dim * dim];

    let result = pauli_coefficients_xz_phase(2, &mut data, &mut x, &mut z, &mut phase);
    assert_eq!(
        result,
        Err(PauliLcuError::EncodingMismatch { field: "z", expected: 32, actual: 31 })
    );
    // Fail-fast: the matrix must not have been transformed.
    assert_eq!(data, untouched, "Matrix was modified despite the validation failure");
}

#[test]
fn test_qubit_overflow_rejected() {
    let mut data = vec![c(0.0, 0.0); 4];
    let result = pauli_coefficients_lexicographic(40, &mut data);
    assert_eq!(result, Err(PauliLcuError::QubitOverflow { num_qubits: 40 }));
}

#[test]
fn test_lexicographic_error_leaves_buffer_untouched() {
    // Buffer too short for two qubits: validation fails before any write.
    let mut data = random_matrix(2, 555);
    let untouched = data.clone();
    let result = pauli_coefficients_lexicographic(2, &mut data);
    assert_eq!(result, Err(PauliLcuError::BufferMismatch { expected: 16, actual: 4 }));
    assert_eq!(data, untouched, "Destination was modified despite the validation failure");
}
