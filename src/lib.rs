//! # cozec
//!
//! Co-Z Jacobian arithmetic and a regular scalar-multiplication ladder for
//! short Weierstrass curves `y² = x³ + a·x + b` over prime fields.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! cozec = "0.3"
//! ```
//!
//! ```
//! use cozec::prelude::*;
//!
//! # fn main() -> cozec::algorithms::Result<()> {
//! let field = Field::from_params(&NIST_P256)?;
//! let curve = Curve::from_params(&field, &NIST_P256)?;
//! let g = curve.generator(&NIST_P256)?;
//!
//! let k = Scalar::from_u64(7);
//! let q = scalar_multiply(&k, &JacobianPoint::from_affine(&g))?.to_affine()?;
//! assert!(!q.is_infinity());
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`cozec-algorithms`]: field, curve, points, co-Z formulas, ladder
//! - [`cozec-params`]: named curve parameter sets
//! - [`cozec-internal`]: constant-time helpers

pub use cozec_algorithms as algorithms;
pub use cozec_internal as internal;
pub use cozec_params as params;

/// Common imports for cozec users
pub mod prelude {
    pub use cozec_algorithms::ec::{
        scalar_multiply, AffinePoint, Curve, Field, FieldElement, JacobianPoint, Scalar,
        ScalarMultiplier,
    };
    pub use cozec_algorithms::{Error, Result};
    pub use cozec_params::curves::{WeierstrassParams, NIST_P256};

    // Constant-time results (`Choice`) and scalar wiping surface in the API
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
    pub use zeroize::Zeroize;
}
