//! Affine and Jacobian point representations

use super::curve::Curve;
use super::field::FieldElement;
use super::limbs::ENCODED_SIZE;
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[derive(Clone, Copy, Debug)]
enum Affine<'a> {
    Infinity,
    Coordinates {
        x: FieldElement<'a>,
        y: FieldElement<'a>,
    },
}

/// A curve point as a direct `(x, y)` pair, or the point at infinity
///
/// Infinity is its own variant, never a coordinate sentinel, so a curve with
/// a genuine point at `(0, 0)` is represented unambiguously. No on-curve
/// check is performed at construction; see [`AffinePoint::is_on_curve`].
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<'a> {
    curve: &'a Curve<'a>,
    repr: Affine<'a>,
}

impl PartialEq for AffinePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.curve != other.curve {
            return false;
        }
        match (&self.repr, &other.repr) {
            (Affine::Infinity, Affine::Infinity) => true,
            (Affine::Coordinates { x: x1, y: y1 }, Affine::Coordinates { x: x2, y: y2 }) => {
                x1 == x2 && y1 == y2
            }
            _ => false,
        }
    }
}

impl Eq for AffinePoint<'_> {}

impl<'a> AffinePoint<'a> {
    /// The point at infinity of `curve`
    pub fn infinity(curve: &'a Curve<'a>) -> Self {
        AffinePoint {
            curve,
            repr: Affine::Infinity,
        }
    }

    /// Create a point from big-endian coordinates, each reduced mod p
    pub fn new(
        curve: &'a Curve<'a>,
        x: &[u8; ENCODED_SIZE],
        y: &[u8; ENCODED_SIZE],
    ) -> Result<Self> {
        let field = curve.field();
        let x = field.element_from_be_bytes(x)?;
        let y = field.element_from_be_bytes(y)?;
        Self::from_coordinates(curve, x, y)
    }

    /// Create a point from field elements of the curve's field
    pub fn from_coordinates(
        curve: &'a Curve<'a>,
        x: FieldElement<'a>,
        y: FieldElement<'a>,
    ) -> Result<Self> {
        if x.field() != curve.field() || y.field() != curve.field() {
            return Err(Error::IncompatibleContext {
                operation: "AffinePoint::from_coordinates",
            });
        }
        Ok(AffinePoint {
            curve,
            repr: Affine::Coordinates { x, y },
        })
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &'a Curve<'a> {
        self.curve
    }

    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self.repr, Affine::Infinity)
    }

    /// x-coordinate, `None` at infinity
    pub fn x(&self) -> Option<FieldElement<'a>> {
        match self.repr {
            Affine::Coordinates { x, .. } => Some(x),
            Affine::Infinity => None,
        }
    }

    /// y-coordinate, `None` at infinity
    pub fn y(&self) -> Option<FieldElement<'a>> {
        match self.repr {
            Affine::Coordinates { y, .. } => Some(y),
            Affine::Infinity => None,
        }
    }

    /// The opposite point `(x, -y)`
    pub fn negate(&self) -> Self {
        match self.repr {
            Affine::Infinity => *self,
            Affine::Coordinates { x, y } => AffinePoint {
                curve: self.curve,
                repr: Affine::Coordinates { x, y: y.negate() },
            },
        }
    }

    /// Check `y² = x³ + a·x + b`. Infinity is on every curve.
    pub fn is_on_curve(&self) -> Result<bool> {
        match self.repr {
            Affine::Infinity => Ok(true),
            Affine::Coordinates { x, y } => Ok(y.square() == self.curve.rhs(&x)?),
        }
    }
}

/// A point in Jacobian coordinates `(X, Y, Z)`, standing for the affine
/// point `(X/Z², Y/Z³)`; `Z = 0` is the point at infinity.
///
/// Two points are *co-Z* when their Z coordinates are equal. The formulas in
/// this module's sibling `coz` rely on that relation to add points without
/// a field inversion.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<'a> {
    pub(crate) curve: &'a Curve<'a>,
    pub(crate) x: FieldElement<'a>,
    pub(crate) y: FieldElement<'a>,
    pub(crate) z: FieldElement<'a>,
}

impl<'a> JacobianPoint<'a> {
    /// Create a point from raw Jacobian coordinates of the curve's field
    pub fn new(
        curve: &'a Curve<'a>,
        x: FieldElement<'a>,
        y: FieldElement<'a>,
        z: FieldElement<'a>,
    ) -> Result<Self> {
        let field = curve.field();
        if x.field() != field || y.field() != field || z.field() != field {
            return Err(Error::IncompatibleContext {
                operation: "JacobianPoint::new",
            });
        }
        Ok(JacobianPoint { curve, x, y, z })
    }

    /// The point at infinity, `(1, 1, 0)`
    pub fn identity(curve: &'a Curve<'a>) -> Self {
        let field = curve.field();
        JacobianPoint {
            curve,
            x: field.one(),
            y: field.one(),
            z: field.zero(),
        }
    }

    /// Lift an affine point to `(x, y, 1)`; infinity maps to `(1, 1, 0)`
    pub fn from_affine(point: &AffinePoint<'a>) -> Self {
        let curve = point.curve();
        match point.repr {
            Affine::Infinity => Self::identity(curve),
            Affine::Coordinates { x, y } => JacobianPoint {
                curve,
                x,
                y,
                z: curve.field().one(),
            },
        }
    }

    /// Normalize back to affine coordinates with a single inversion
    pub fn to_affine(&self) -> Result<AffinePoint<'a>> {
        let z_inv = match self.z.invert() {
            Ok(inv) => inv,
            Err(Error::NonInvertible { .. }) => return Ok(AffinePoint::infinity(self.curve)),
            Err(e) => return Err(e),
        };
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv)?;
        AffinePoint::from_coordinates(self.curve, self.x.mul(&z_inv2)?, self.y.mul(&z_inv3)?)
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &'a Curve<'a> {
        self.curve
    }

    /// X coordinate
    pub fn x(&self) -> FieldElement<'a> {
        self.x
    }

    /// Y coordinate
    pub fn y(&self) -> FieldElement<'a> {
        self.y
    }

    /// Z coordinate
    pub fn z(&self) -> FieldElement<'a> {
        self.z
    }

    /// Is this the point at infinity (`Z = 0`)?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero().into()
    }

    /// Constant-time test for `Z = 1`
    pub fn has_unit_z(&self) -> Choice {
        self.z.ct_eq(&self.curve.field().one())
    }

    /// Constant-time test for a shared Z coordinate
    pub fn is_co_z(&self, other: &Self) -> Choice {
        self.z.ct_eq(&other.z)
    }

    /// The opposite point `(X, -Y, Z)`
    pub fn negate(&self) -> Self {
        JacobianPoint {
            y: self.y.negate(),
            ..*self
        }
    }

    /// Whether both points represent the same affine point, compared by
    /// cross-multiplication so no inversion is needed
    pub fn is_equivalent(&self, other: &Self) -> Result<bool> {
        self.require_same_curve(other, "JacobianPoint::is_equivalent")?;
        let self_inf = self.is_identity();
        let other_inf = other.is_identity();
        if self_inf || other_inf {
            return Ok(self_inf == other_inf);
        }

        // X1·Z2² == X2·Z1² and Y1·Z2³ == Y2·Z1³
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2)?;
        let u2 = other.x.mul(&z1z1)?;
        let s1 = self.y.mul(&z2z2.mul(&other.z)?)?;
        let s2 = other.y.mul(&z1z1.mul(&self.z)?)?;
        Ok(u1 == u2 && s1 == s2)
    }

    pub(crate) fn require_same_curve(&self, other: &Self, operation: &'static str) -> Result<()> {
        if core::ptr::eq(self.curve, other.curve) || self.curve == other.curve {
            Ok(())
        } else {
            Err(Error::IncompatibleContext { operation })
        }
    }
}

impl ConditionallySelectable for JacobianPoint<'_> {
    /// Coordinates are selected in constant time; the curve of `a` is kept.
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        JacobianPoint {
            curve: a.curve,
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
