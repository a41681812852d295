//! Co-Z Jacobian formulas
//!
//! Doubling, tripling and addition formulas in the style of Meloni and of
//! Goundar, Joye and Miyaji ("Co-Z addition formulæ and binary ladders on
//! elliptic curves", CHES 2010). Several of them return a second point that
//! is an input re-expressed with the same Z as the result, so a pair of
//! points stays co-Z from one step to the next without any inversion.
//!
//! Every formula runs a fixed sequence of field operations. The only early
//! returns are precondition failures, which depend on the shape of the call
//! and never on secret coordinates.

use super::point::JacobianPoint;
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable};

impl<'a> JacobianPoint<'a> {
    fn require_unit_z(&self, operation: &'static str) -> Result<()> {
        if bool::from(self.has_unit_z()) {
            Ok(())
        } else {
            Err(Error::co_z(operation, "Z coordinate must be 1"))
        }
    }

    fn require_co_z(&self, other: &Self, operation: &'static str) -> Result<()> {
        self.require_same_curve(other, operation)?;
        if bool::from(self.is_co_z(other)) {
            Ok(())
        } else {
            Err(Error::co_z(operation, "Z coordinates differ"))
        }
    }

    /// Standard Jacobian doubling, `2P`, for any Z and any `a`.
    ///
    /// Infinity and 2-torsion points double to a point with `Z = 0`.
    pub fn double(&self) -> Result<Self> {
        let (x1, y1, z1) = (self.x, self.y, self.z);

        let n = z1.square();
        let e = y1.square();
        let b = x1.square();
        let l = e.square();
        // S = 2·((X + E)² − B − L) = 4·X·Y²
        let s = x1.add(&e)?.square().sub(&b)?.sub(&l)?.double();
        // M = 3·B + a·Z⁴
        let m = b.double().add(&b)?.add(&self.curve.a().mul(&n.square())?)?;

        let x3 = m.square().sub(&s.double())?;
        let l8 = l.double().double().double();
        let y3 = m.mul(&s.sub(&x3)?)?.sub(&l8)?;
        // Z3 = (Y + Z)² − E − N = 2·Y·Z
        let z3 = y1.add(&z1)?.square().sub(&e)?.sub(&n)?;

        Ok(JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            ..*self
        })
    }

    /// DBLU: doubling with co-Z update.
    ///
    /// Requires `Z = 1`. Returns `(2P, P')` where `P'` is `P` rescaled to
    /// share the Z coordinate of `2P`.
    pub fn dblu(&self) -> Result<(Self, Self)> {
        self.require_unit_z("DBLU")?;
        let (x1, y1) = (self.x, self.y);

        let b = x1.square();
        let e = y1.square();
        let l = e.square();
        let s = x1.add(&e)?.square().sub(&b)?.sub(&l)?.double();
        // Z = 1, so a·Z⁴ = a
        let m = b.double().add(&b)?.add(&self.curve.a())?;

        let x3 = m.square().sub(&s.double())?;
        let l8 = l.double().double().double();
        let y3 = m.mul(&s.sub(&x3)?)?.sub(&l8)?;
        let z3 = y1.double();

        let doubled = JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            ..*self
        };
        // (X·Z3², Y·Z3³) with Z3 = 2Y is exactly (S, 8L)
        let updated = JacobianPoint {
            x: s,
            y: l8,
            z: z3,
            ..*self
        };
        Ok((doubled, updated))
    }

    /// ZADDU: co-Z addition with update.
    ///
    /// Requires `self.Z == other.Z`. Returns `(self + other, self')` where
    /// `self'` is `self` rescaled to share the Z coordinate of the sum.
    /// The sum is only meaningful when `self ≠ ±other`.
    pub fn zaddu(&self, other: &Self) -> Result<(Self, Self)> {
        self.require_co_z(other, "ZADDU")?;
        let (x1, y1, z) = (self.x, self.y, self.z);
        let (x2, y2) = (other.x, other.y);

        let dx = x1.sub(&x2)?;
        let c = dx.square();
        let w1 = x1.mul(&c)?;
        let w2 = x2.mul(&c)?;
        let dy = y1.sub(&y2)?;
        let d = dy.square();
        let a1 = y1.mul(&w1.sub(&w2)?)?;

        let x3 = d.sub(&w1)?.sub(&w2)?;
        let y3 = dy.mul(&w1.sub(&x3)?)?.sub(&a1)?;
        let z3 = z.mul(&dx)?;

        let sum = JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            ..*self
        };
        let updated = JacobianPoint {
            x: w1,
            y: a1,
            z: z3,
            ..*self
        };
        Ok((sum, updated))
    }

    /// TPLU: tripling with co-Z update.
    ///
    /// Requires `Z = 1`. Returns `(3P, P'')` with `P''` co-Z with `3P`.
    pub fn tplu(&self) -> Result<(Self, Self)> {
        let (doubled, updated) = self.dblu()?;
        updated.zaddu(&doubled)
    }

    /// ZDAU: co-Z double-and-add with update.
    ///
    /// Requires `self.Z == other.Z`. Returns `(2·self + other, other')` where
    /// `other'` is `other` rescaled to the Z coordinate of the first output.
    /// Internally this is a ZADDU computing `self + other` followed by a
    /// conjugate co-Z addition producing both `(self + other) + self` and
    /// `(self + other) − self`, always with the same operation sequence.
    pub fn zdau(&self, other: &Self) -> Result<(Self, Self)> {
        self.require_co_z(other, "ZDAU")?;
        let (x1, y1, z) = (self.x, self.y, self.z);
        let (x2, y2) = (other.x, other.y);

        // self + other, with self updated to (W1', A1')
        let dx = x1.sub(&x2)?;
        let cp = dx.square();
        let w1p = x1.mul(&cp)?;
        let w2p = x2.mul(&cp)?;
        let dy = y1.sub(&y2)?;
        let dp = dy.square();
        let a1p = y1.mul(&w1p.sub(&w2p)?)?;
        let x3p = dp.sub(&w1p)?.sub(&w2p)?;

        // conjugate addition of (self + other) and self'
        let c = x3p.sub(&w1p)?.square();
        let a1p2 = a1p.double();
        // Y3' = 2·Y(self + other), via (u + v)² − u² − v²
        let y3p = dy.add(&w1p.sub(&x3p)?)?.square().sub(&dp)?.sub(&c)?.sub(&a1p2)?;
        let w1 = x3p.mul(&c)?.double().double();
        let w2 = w1p.mul(&c)?.double().double();
        let a1 = y3p.mul(&w1.sub(&w2)?)?;

        let y_minus = y3p.sub(&a1p2)?;
        let x3 = y_minus.square().sub(&w1)?.sub(&w2)?;
        let y3 = y_minus.mul(&w1.sub(&x3)?)?.sub(&a1)?;
        let z3 = z.mul(&dx.add(&x3p)?.sub(&w1p)?.square().sub(&cp)?.sub(&c)?)?;

        let y_plus = y3p.add(&a1p2)?;
        let x2n = y_plus.square().sub(&w1)?.sub(&w2)?;
        let y2n = y_plus.mul(&w1.sub(&x2n)?)?.sub(&a1)?;

        let result = JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            ..*self
        };
        let updated = JacobianPoint {
            x: x2n,
            y: y2n,
            z: z3,
            ..*self
        };
        Ok((result, updated))
    }

    /// Mixed addition `self + other` where `other` has `Z = 1`.
    ///
    /// Complete for the inputs it can meet: when `self` is infinity the
    /// result is `other`, when `self == other` it is `2·other`, and when
    /// `self == -other` it is infinity. The special cases are resolved with
    /// constant-time selects after computing every candidate.
    pub fn add_mixed(&self, other: &Self) -> Result<Self> {
        self.require_same_curve(other, "add_mixed")?;
        other.require_unit_z("add_mixed")?;
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2) = (other.x, other.y);

        let z1z1 = z1.square();
        let u2 = x2.mul(&z1z1)?;
        let s2 = y2.mul(&z1)?.mul(&z1z1)?;
        let h = u2.sub(&x1)?;
        let hh = h.square();
        let i = hh.double().double();
        let j = h.mul(&i)?;
        let r = s2.sub(&y1)?.double();
        let v = x1.mul(&i)?;

        let x3 = r.square().sub(&j)?.sub(&v.double())?;
        let y3 = r.mul(&v.sub(&x3)?)?.sub(&y1.mul(&j)?.double())?;
        let z3 = z1.add(&h)?.square().sub(&z1z1)?.sub(&hh)?;

        let sum = JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            ..*self
        };
        let doubled = other.double()?;

        let self_is_identity = z1.is_zero();
        let same_point: Choice = h.is_zero() & r.is_zero() & !self_is_identity;

        let result = JacobianPoint::conditional_select(&sum, &doubled, same_point);
        Ok(JacobianPoint::conditional_select(&result, other, self_is_identity))
    }
}
