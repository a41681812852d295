//! Regular co-Z scalar multiplication ladder
//!
//! Right-to-left double-add ladder (Joye, CHES 2007) driven by the co-Z
//! ZDAU formula. Two registers `R[0], R[1]` are kept co-Z; after bit `i - 1`
//! has been processed they satisfy
//!
//! ```text
//! R[0] = ((x | 1) mod 2^i) · P        R[0] + R[1] = 2^i · P
//! ```
//!
//! Each bit `b` updates `R[1-b] ← 2·R[1-b] + R[b]`. The same ZDAU call runs
//! for every bit; which register feeds which operand is decided with a
//! constant-time swap. The scalar is forced odd for the ladder, and a single
//! mixed addition of `-P` at the end, selected in constant time, undoes that
//! for even scalars.

use super::curve::Curve;
use super::point::JacobianPoint;
use super::scalar::Scalar;
use crate::error::{Error, Result};
use cozec_internal::constant_time::{ct_select, ct_swap};

/// The two co-Z ladder registers
#[derive(Clone, Copy, Debug)]
pub(crate) struct Registers<'a> {
    pub(crate) r0: JacobianPoint<'a>,
    pub(crate) r1: JacobianPoint<'a>,
}

/// Computes `x · P` for a fixed curve with a data-independent operation
/// sequence.
#[derive(Clone, Copy, Debug)]
pub struct ScalarMultiplier<'a> {
    curve: &'a Curve<'a>,
}

impl<'a> ScalarMultiplier<'a> {
    /// Prepare a multiplier for `curve`.
    ///
    /// Fails with [`Error::InvalidCurve`] when the group order is even; the
    /// final parity correction relies on it being odd.
    pub fn new(curve: &'a Curve<'a>) -> Result<Self> {
        if !curve.has_odd_order() {
            return Err(Error::InvalidCurve {
                reason: "scalar multiplication requires an odd group order",
            });
        }
        Ok(ScalarMultiplier { curve })
    }

    /// The curve this multiplier works on
    pub fn curve(&self) -> &'a Curve<'a> {
        self.curve
    }

    /// Compute `scalar · point`.
    ///
    /// `point` must have `Z = 1` and lie on the curve; `scalar` should be in
    /// `[0, order)`. Only the low `curve.order_bits()` bits of the scalar are
    /// read, and exactly that many ladder steps are executed whatever its
    /// value. Within that range no register reaches infinity before the last
    /// step, so the two registers stay co-Z throughout.
    /// A zero scalar yields the point at infinity (`Z = 0`).
    pub fn multiply(
        &self,
        scalar: &Scalar,
        point: &JacobianPoint<'a>,
    ) -> Result<JacobianPoint<'a>> {
        if !(core::ptr::eq(self.curve, point.curve()) || self.curve == point.curve()) {
            return Err(Error::IncompatibleContext {
                operation: "ScalarMultiplier::multiply",
            });
        }
        if !bool::from(point.has_unit_z()) {
            return Err(Error::co_z(
                "ScalarMultiplier::multiply",
                "base point Z coordinate must be 1",
            ));
        }

        let mut regs = Self::bootstrap(scalar, point)?;
        for i in 2..self.curve.order_bits() {
            regs = Self::step(regs, scalar, i)?;
        }
        Self::finish(regs, scalar, point)
    }

    /// Registers after the two lowest bits, with bit 0 forced to 1:
    /// `R[1-b] = 3P`, `R[b] = P` for `b = bit 1`.
    pub(crate) fn bootstrap(scalar: &Scalar, point: &JacobianPoint<'a>) -> Result<Registers<'a>> {
        let (tripled, base) = point.tplu()?;
        let mut r0 = base;
        let mut r1 = tripled;
        ct_swap(&mut r0, &mut r1, scalar.bit(1));
        Ok(Registers { r0, r1 })
    }

    /// One ladder step for bit `index`: `R[1-b] ← 2·R[1-b] + R[b]`.
    pub(crate) fn step(regs: Registers<'a>, scalar: &Scalar, index: usize) -> Result<Registers<'a>> {
        let bit = scalar.bit(index);
        let Registers { mut r0, mut r1 } = regs;

        // r1 ← R[1-b], r0 ← R[b]
        ct_swap(&mut r0, &mut r1, bit);
        let (sum, updated) = r1.zdau(&r0)?;

        // When 2·R[1-b] + R[b] is infinity the shared Z collapses to zero and
        // the rescaled copy of R[b] is lost with it; keep the old copy. This
        // only happens on the last step, where R[0] no longer needs a co-Z
        // partner.
        r0 = ct_select(&updated, &r0, sum.z().is_zero());
        r1 = sum;

        ct_swap(&mut r0, &mut r1, bit);
        Ok(Registers { r0, r1 })
    }

    /// Undo the forced low bit: subtract `P` from `R[0]` when the scalar is even
    fn finish(
        regs: Registers<'a>,
        scalar: &Scalar,
        point: &JacobianPoint<'a>,
    ) -> Result<JacobianPoint<'a>> {
        let result = regs.r0;
        let corrected = result.add_mixed(&point.negate())?;
        Ok(ct_select(&result, &corrected, scalar.is_even()))
    }
}

/// Compute `scalar · point` on the point's own curve.
///
/// Shorthand for [`ScalarMultiplier::new`] followed by
/// [`ScalarMultiplier::multiply`].
pub fn scalar_multiply<'a>(
    scalar: &Scalar,
    point: &JacobianPoint<'a>,
) -> Result<JacobianPoint<'a>> {
    ScalarMultiplier::new(point.curve())?.multiply(scalar, point)
}
