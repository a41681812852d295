//! Reference oracle and P-256 fixtures
//!
//! The `p256` crate computes `k·G` (or `k·P`) independently of cozec so the
//! two results can be compared coordinate by coordinate.

use cozec_algorithms::ec::{Curve, Field, JacobianPoint, ENCODED_SIZE};
use cozec_params::curves::NIST_P256;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::elliptic_curve::PrimeField;

/// Big-endian affine coordinates, `None` for the point at infinity
pub type AffineBytes = Option<([u8; ENCODED_SIZE], [u8; ENCODED_SIZE])>;

/// Run `f` with a freshly built P-256 curve and its generator lifted to
/// Jacobian form. The field and curve live on this stack frame, so results
/// must be extracted (e.g. with [`affine_bytes`]) before returning.
pub fn with_p256<R>(f: impl for<'a> FnOnce(&'a Curve<'a>, JacobianPoint<'a>) -> R) -> R {
    let field = Field::from_params(&NIST_P256).expect("P-256 prime is a valid modulus");
    let curve = Curve::from_params(&field, &NIST_P256).expect("P-256 parameters are consistent");
    let g = curve
        .generator(&NIST_P256)
        .expect("P-256 generator coordinates are reduced");
    f(&curve, JacobianPoint::from_affine(&g))
}

/// Affine coordinates of a cozec point
pub fn affine_bytes(point: &JacobianPoint<'_>) -> AffineBytes {
    let affine = point.to_affine().expect("normalization cannot fail on one curve");
    Some((affine.x()?.to_be_bytes(), affine.y()?.to_be_bytes()))
}

/// Affine coordinates of a reference point
pub fn reference_affine(point: &p256::ProjectivePoint) -> AffineBytes {
    let encoded = point.to_affine().to_encoded_point(false);
    let (x, y) = (encoded.x()?, encoded.y()?);
    let mut out_x = [0u8; ENCODED_SIZE];
    let mut out_y = [0u8; ENCODED_SIZE];
    out_x.copy_from_slice(x);
    out_y.copy_from_slice(y);
    Some((out_x, out_y))
}

/// Reference scalar from big-endian bytes; `None` unless `k < n`
pub fn reference_scalar(k: &[u8; ENCODED_SIZE]) -> Option<p256::Scalar> {
    let repr = p256::FieldBytes::clone_from_slice(k);
    p256::Scalar::from_repr(repr).into()
}

/// `k·G` by the reference implementation; `None` coordinates for infinity.
///
/// Panics if `k ≥ n`.
pub fn reference_mul(k: &[u8; ENCODED_SIZE]) -> AffineBytes {
    let scalar = reference_scalar(k).expect("scalar must be below the group order");
    reference_affine(&(p256::ProjectivePoint::GENERATOR * scalar))
}

/// `k·(m·G)` by the reference implementation
pub fn reference_mul_multiple(k: &[u8; ENCODED_SIZE], m: u64) -> AffineBytes {
    let scalar = reference_scalar(k).expect("scalar must be below the group order");
    let base = p256::ProjectivePoint::GENERATOR * p256::Scalar::from(m);
    reference_affine(&(base * scalar))
}

/// Decode a big-endian hex string of at most 64 digits, left-padded
pub fn hex32(hex_str: &str) -> [u8; ENCODED_SIZE] {
    let decoded = hex::decode(hex_str).expect("valid hex");
    assert!(decoded.len() <= ENCODED_SIZE, "hex constant too long");
    let mut out = [0u8; ENCODED_SIZE];
    out[ENCODED_SIZE - decoded.len()..].copy_from_slice(&decoded);
    out
}

/// Big-endian encoding of a small scalar
pub fn scalar_bytes(k: u64) -> [u8; ENCODED_SIZE] {
    let mut out = [0u8; ENCODED_SIZE];
    out[ENCODED_SIZE - 8..].copy_from_slice(&k.to_be_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scalar_rejects_order() {
        assert!(reference_scalar(&NIST_P256.n).is_none());
        assert!(reference_scalar(&scalar_bytes(5)).is_some());
    }

    #[test]
    fn fixtures_agree_with_reference_generator() {
        let g = with_p256(|_, g| affine_bytes(&g));
        assert_eq!(g, reference_mul(&scalar_bytes(1)));
        assert_eq!(g, Some((NIST_P256.g_x, NIST_P256.g_y)));
    }
}
