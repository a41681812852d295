//! Short Weierstrass curve parameters

use super::field::{Field, FieldElement};
use super::limbs::{self, Limbs, ENCODED_SIZE};
use super::point::AffinePoint;
use crate::error::{validate, Error, Result};
use cozec_params::curves::WeierstrassParams;

/// The curve `y² = x³ + a·x + b` over a prime field, together with the order
/// of the subgroup its base point generates. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Curve<'a> {
    field: &'a Field,
    a: FieldElement<'a>,
    b: FieldElement<'a>,
    order: Limbs,
}

impl PartialEq for Curve<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.a == other.a && self.b == other.b && self.order == other.order
    }
}

impl Eq for Curve<'_> {}

impl<'a> Curve<'a> {
    /// Build a curve from its coefficients and the big-endian subgroup order.
    ///
    /// `a` and `b` must belong to `field` and satisfy `4a³ + 27b² ≠ 0`. The
    /// order is not checked for primality; scalar multiplication additionally
    /// requires it to be odd.
    pub fn new(
        field: &'a Field,
        a: FieldElement<'a>,
        b: FieldElement<'a>,
        order: &[u8; ENCODED_SIZE],
    ) -> Result<Self> {
        if a.field() != field || b.field() != field {
            return Err(Error::IncompatibleContext {
                operation: "Curve::new",
            });
        }
        let order = limbs::from_be_bytes(order);
        validate::parameter(
            limbs::bit_length_vartime(&order) > 0,
            "order",
            "must be non-zero",
        )?;
        let four_a3 = a.square().mul(&a)?.mul(&field.from_u64(4))?;
        let twenty_seven_b2 = b.square().mul(&field.from_u64(27))?;
        validate::parameter(
            !bool::from(four_a3.add(&twenty_seven_b2)?.is_zero()),
            "discriminant",
            "curve is singular",
        )?;
        Ok(Curve { field, a, b, order })
    }

    /// Build the curve described by a named parameter set over `field`
    pub fn from_params(field: &'a Field, params: &WeierstrassParams) -> Result<Self> {
        if field.modulus_be_bytes() != params.p {
            return Err(Error::IncompatibleContext {
                operation: "Curve::from_params",
            });
        }
        let a = field.element_from_be_bytes(&params.a)?;
        let b = field.element_from_be_bytes(&params.b)?;
        Self::new(field, a, b, &params.n)
    }

    /// The published base point of a parameter set, as an affine point
    pub fn generator<'c>(&'c self, params: &WeierstrassParams) -> Result<AffinePoint<'c>> {
        AffinePoint::new(self, &params.g_x, &params.g_y)
    }

    /// Base field
    pub fn field(&self) -> &'a Field {
        self.field
    }

    /// Coefficient a
    pub fn a(&self) -> FieldElement<'a> {
        self.a
    }

    /// Coefficient b
    pub fn b(&self) -> FieldElement<'a> {
        self.b
    }

    /// Subgroup order as big-endian bytes
    pub fn order_be_bytes(&self) -> [u8; ENCODED_SIZE] {
        limbs::to_be_bytes(&self.order)
    }

    /// Bit length of the field prime
    pub fn nbits(&self) -> usize {
        self.field.bits()
    }

    /// Bit length of the subgroup order.
    ///
    /// The scalar ladder always runs this many iterations, whatever the
    /// scalar's own bit length. Equal to [`Curve::nbits`] for the usual
    /// prime-order curves; smaller when the curve has a cofactor.
    pub fn order_bits(&self) -> usize {
        limbs::bit_length_vartime(&self.order)
    }

    /// Whether the subgroup order is odd
    pub fn has_odd_order(&self) -> bool {
        self.order[0] & 1 == 1
    }

    /// Right-hand side of the curve equation, `x³ + a·x + b`
    pub fn rhs(&self, x: &FieldElement<'a>) -> Result<FieldElement<'a>> {
        let x3 = x.square().mul(x)?;
        let ax = self.a.mul(x)?;
        x3.add(&ax)?.add(&self.b)
    }

    /// Recover a `y` with `(x, y)` on the curve, if any.
    ///
    /// Only available when `p ≡ 3 (mod 4)`; returns `None` otherwise or when
    /// `x` is not the abscissa of a curve point. Which of the two roots is
    /// returned is unspecified.
    pub fn compute_y(&self, x: &FieldElement<'a>) -> Result<Option<FieldElement<'a>>> {
        Ok(self.rhs(x)?.sqrt())
    }
}
