//! Co-Z elliptic curve arithmetic with constant-time implementation
//!
//! This crate provides field, curve and point arithmetic for short
//! Weierstrass curves, the co-Z Jacobian formulas of Goundar, Joye and
//! Miyaji, and a regular scalar-multiplication ladder built on them.
//! The library is usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Branch-free field arithmetic with `subtle` selects
//! - A fixed number of ladder iterations per curve, whatever the scalar
//! - Register selection by constant-time swaps instead of secret indexing
//! - Scalars zeroized on drop

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{
    scalar_multiply, AffinePoint, Curve, Field, FieldElement, JacobianPoint, Scalar,
    ScalarMultiplier,
};
