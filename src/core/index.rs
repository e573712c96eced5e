// src/core/index.rs

//! Bit-interleaving index algebra.
//!
//! Pauli coefficients live at two kinds of addresses:
//!
//! - **symplectic order** - the `(row, column)` position of the coefficient
//!   in the transformed matrix buffer;
//! - **lexicographic order** - a flat index whose bit pairs spell out the
//!   Pauli string qubit by qubit (`II`, `IX`, `IY`, `IZ`, `XI`, ...).
//!
//! The two are related by interleaving the bits of `(row ^ column, column)`
//! into a single word. Every ordering conversion in the crate is built from
//! the functions here, which form exact bijections on `[0, dim * dim)`.

/// Spreads the bits of `input` so they occupy the even bit positions of the
/// result, with zeros in between.
///
/// Uses the classic 5-step shift-xor-mask cascade, see
/// <https://lemire.me/blog/2018/01/08/how-fast-can-you-bit-interleave-32-bit-integers/>
pub fn interleave_with_zeros(input: u32) -> u64 {
    let mut word = input as u64;
    word = (word ^ (word << 16)) & 0x0000_ffff_0000_ffff;
    word = (word ^ (word << 8)) & 0x00ff_00ff_00ff_00ff;
    word = (word ^ (word << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    word = (word ^ (word << 2)) & 0x3333_3333_3333_3333;
    word = (word ^ (word << 1)) & 0x5555_5555_5555_5555;
    word
}

/// Compacts the even bits of `word` back into a contiguous integer.
/// Exact inverse of [`interleave_with_zeros`]; the odd bits are ignored.
pub fn deinterleave_even(word: u64) -> u32 {
    let mut word = word & 0x5555_5555_5555_5555;
    word = (word ^ (word >> 1)) & 0x3333_3333_3333_3333;
    word = (word ^ (word >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    word = (word ^ (word >> 4)) & 0x00ff_00ff_00ff_00ff;
    word = (word ^ (word >> 8)) & 0x0000_ffff_0000_ffff;
    word = (word ^ (word >> 16)) & 0x0000_0000_ffff_ffff;
    word as u32
}

/// Interleaves two n-bit values into a single 2n-bit value whose bit pairs
/// alternate between the two sources: bits of `a` land at even positions,
/// bits of `b` at odd positions.
pub fn combine(a: u32, b: u32) -> u64 {
    interleave_with_zeros(a) | (interleave_with_zeros(b) << 1)
}

/// Splits a combined word back into its two sources. Exact inverse of
/// [`combine`].
pub fn split(word: u64) -> (u32, u32) {
    (deinterleave_even(word), deinterleave_even(word >> 1))
}

/// Lexicographic index of the coefficient stored at matrix position
/// (row `i`, column `j`).
///
/// Bit pair `q` of the result encodes the Pauli acting on qubit `q`
/// through the canonical table in [`crate::core::pauli`].
pub fn lex_index(i: u32, j: u32) -> u64 {
    combine(i ^ j, j)
}

/// Symplectic `(row, column)` position of a lexicographic index.
/// Exact inverse of [`lex_index`].
pub fn lex_indices(id: u64) -> (u32, u32) {
    let (low, high) = split(id);
    (low ^ high, high)
}
