//! Elliptic Curve Primitives
//!
//! Constant-shape arithmetic on short Weierstrass curves `y² = x³ + a·x + b`
//! over a prime field chosen at runtime. The building blocks are
//!
//! - [`Field`] / [`FieldElement`]: Montgomery arithmetic modulo `p < 2²⁵⁶`
//! - [`Curve`]: coefficients and subgroup order
//! - [`AffinePoint`] / [`JacobianPoint`]: point representations
//! - the co-Z formulas on [`JacobianPoint`] (`dblu`, `zaddu`, `tplu`,
//!   `zdau`, `add_mixed`)
//! - [`ScalarMultiplier`]: a regular double-add ladder over those formulas
//!
//! Nothing here is tied to a particular curve; named parameter sets live in
//! `cozec-params`.

mod coz;
mod curve;
mod field;
mod ladder;
mod limbs;
mod point;
mod scalar;

pub use curve::Curve;
pub use field::{Field, FieldElement};
pub use ladder::{scalar_multiply, ScalarMultiplier};
pub use limbs::ENCODED_SIZE;
pub use point::{AffinePoint, JacobianPoint};
pub use scalar::Scalar;
