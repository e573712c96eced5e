// src/core/pauli.rs

//! The canonical mapping between 2-bit codes, Pauli axes, and powers of `i`.
//!
//! Every path that touches this mapping - the transform's phase pass, the
//! X/Z/phase encoding, and string rendering - goes through this module.
//! Keeping a single table here is what guarantees the orderings and the
//! rendered strings never drift apart: a second hand-written table with a
//! swapped `{Y, Z}` assignment would silently corrupt every consumer.

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// A single-qubit Pauli axis.
///
/// The discriminants fix the canonical 2-bit code: `00 -> I`, `01 -> X`,
/// `10 -> Y`, `11 -> Z`. Under this code, lexicographic coefficient indices
/// enumerate Pauli strings in the order `II`, `IX`, `IY`, `IZ`, `XI`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pauli {
    /// Identity
    I = 0,
    /// Pauli X
    X = 1,
    /// Pauli Y
    Y = 2,
    /// Pauli Z
    Z = 3,
}

impl Pauli {
    /// Decodes the low two bits of `code` into an axis.
    pub fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0 => Pauli::I,
            1 => Pauli::X,
            2 => Pauli::Y,
            _ => Pauli::Z,
        }
    }

    /// The canonical 2-bit code of this axis.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Single-character label used in Pauli strings.
    pub fn as_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// The 2x2 matrix of this axis, row-major.
    pub fn matrix(self) -> [Complex<f64>; 4] {
        let zero = Complex::zero();
        let one = Complex::one();
        let i = Complex::i();
        match self {
            Pauli::I => [one, zero, zero, one],
            Pauli::X => [zero, one, one, zero],
            Pauli::Y => [zero, -i, i, zero],
            Pauli::Z => [one, zero, zero, -one],
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// Powers of -i, indexed by exponent: (-i)^0, (-i)^1, (-i)^2, (-i)^3.
const PHASES: [Complex<f64>; 4] = [
    Complex::new(1.0, 0.0),
    Complex::new(0.0, -1.0),
    Complex::new(-1.0, 0.0),
    Complex::new(0.0, 1.0),
];

/// Phase exponent of the Pauli operator addressed by matrix position
/// (row `i`, column `j`): `popcount(i & j) mod 4`.
///
/// Depends only on `i & j`, so it is symmetric in its arguments.
pub fn phase_exponent(i: usize, j: usize) -> u8 {
    ((i & j).count_ones() & 0b11) as u8
}

/// The phase factor `(-i)^exponent` attached to a coefficient by the
/// forward decomposition.
pub fn phase_factor(exponent: u8) -> Complex<f64> {
    PHASES[(exponent & 0b11) as usize]
}

/// Conjugate factor `i^exponent`, used by the inverse decomposition to undo
/// [`phase_factor`] through the same table.
pub(crate) fn conjugate_phase_factor(exponent: u8) -> Complex<f64> {
    PHASES[(4 - (exponent & 0b11) as usize) & 0b11]
}
