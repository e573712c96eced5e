// src/core/mod.rs

//! Core types, index algebra, and the canonical Pauli code tables.

// Declare modules within core
pub mod error;
pub mod index;
pub mod pauli;

// Re-export public types for convenient access via `pauli_lcu::core::TypeName`
pub use error::PauliLcuError;
pub use pauli::{Pauli, phase_exponent, phase_factor};
