//! Prime field arithmetic over a runtime modulus
//!
//! A [`Field`] is built once from an odd modulus `p < 2²⁵⁶` and precomputes
//! the Montgomery constants for it. [`FieldElement`]s borrow their field and
//! keep their value in Montgomery form (`a·R mod p`, `R = 2²⁵⁶`), always
//! fully reduced into `[0, p)`.
//!
//! Addition, subtraction, negation and multiplication are branch-free: the
//! final reduction step is a `subtle` conditional select. Exponentiation only
//! branches on the bits of the *exponent*, which is always public here
//! (`p - 2` for inversion, `(p + 1) / 4` for square roots).

use super::limbs::{self, Limbs, ENCODED_SIZE, LIMBS};
use crate::error::{validate, Error, Result};
use core::fmt;
use cozec_internal::constant_time::{ct_eq_limbs, ct_is_zero_limbs, ct_select_limbs};
use cozec_params::curves::WeierstrassParams;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Prime field GF(p) with precomputed Montgomery constants
#[derive(Clone)]
pub struct Field {
    /// p, little-endian limbs
    modulus: Limbs,
    /// R mod p, the Montgomery form of 1
    r: Limbs,
    /// R² mod p, used to enter Montgomery form
    r2: Limbs,
    /// -p⁻¹ mod 2⁶⁴
    inv: u64,
    /// bit length of p
    bits: usize,
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        // Everything else is derived from the modulus
        self.modulus == other.modulus
    }
}

impl Eq for Field {}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field(p = 0x{})",
            hex::encode(limbs::to_be_bytes(&self.modulus))
        )
    }
}

impl Field {
    /// Construct GF(p) from a big-endian modulus.
    ///
    /// The modulus must be odd and at least 3. Primality is the caller's
    /// responsibility: with a composite modulus `invert` and `sqrt` return
    /// meaningless values.
    pub fn new(modulus: &[u8; ENCODED_SIZE]) -> Result<Self> {
        let m = limbs::from_be_bytes(modulus);
        validate::parameter(m[0] & 1 == 1, "modulus", "must be odd")?;
        let bits = limbs::bit_length_vartime(&m);
        validate::parameter(bits >= 2, "modulus", "must be at least 3")?;

        let mut field = Field {
            modulus: m,
            r: [0; LIMBS],
            r2: [0; LIMBS],
            inv: Self::neg_inverse_mod_word(m[0]),
            bits,
        };

        // 2^256 mod p, then 2^512 mod p, by doubling from 1
        let mut acc: Limbs = [1, 0, 0, 0];
        for _ in 0..(LIMBS * 64) {
            acc = field.add_limbs(&acc, &acc);
        }
        field.r = acc;
        for _ in 0..(LIMBS * 64) {
            acc = field.add_limbs(&acc, &acc);
        }
        field.r2 = acc;

        Ok(field)
    }

    /// Construct the base field of a named parameter set
    pub fn from_params(params: &WeierstrassParams) -> Result<Self> {
        Self::new(&params.p)
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// The modulus as big-endian bytes
    pub fn modulus_be_bytes(&self) -> [u8; ENCODED_SIZE] {
        limbs::to_be_bytes(&self.modulus)
    }

    /// Whether `p ≡ 3 (mod 4)`, i.e. whether [`FieldElement::sqrt`] is available
    pub fn is_3_mod_4(&self) -> bool {
        self.modulus[0] & 3 == 3
    }

    /// The additive identity
    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: [0; LIMBS],
        }
    }

    /// The multiplicative identity
    pub fn one(&self) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: self.r,
        }
    }

    /// Build an element from a small integer, reduced mod p
    pub fn from_u64(&self, n: u64) -> FieldElement<'_> {
        FieldElement {
            field: self,
            value: self.to_montgomery(&[n, 0, 0, 0]),
        }
    }

    /// Build an element from big-endian bytes. The value must already be
    /// reduced, i.e. `< p`.
    pub fn element_from_be_bytes(&self, bytes: &[u8; ENCODED_SIZE]) -> Result<FieldElement<'_>> {
        let raw = limbs::from_be_bytes(bytes);
        validate::parameter(
            limbs::lt_vartime(&raw, &self.modulus),
            "field element",
            "value is not reduced modulo p",
        )?;
        Ok(FieldElement {
            field: self,
            value: self.to_montgomery(&raw),
        })
    }

    /// Build an element from a big-endian hex string of at most 64 digits
    pub fn element_from_hex(&self, hex_str: &str) -> Result<FieldElement<'_>> {
        let decoded = hex::decode(hex_str)
            .map_err(|_| Error::param("field element", "not a valid hex string"))?;
        validate::max_length("field element", decoded.len(), ENCODED_SIZE)?;
        let mut bytes = [0u8; ENCODED_SIZE];
        bytes[ENCODED_SIZE - decoded.len()..].copy_from_slice(&decoded);
        self.element_from_be_bytes(&bytes)
    }

    /* ================================================================= */
    /*  Limb-level helpers (constant-time)                               */
    /* ================================================================= */

    /// -m⁻¹ mod 2⁶⁴ by Newton iteration; each step doubles the correct bits
    fn neg_inverse_mod_word(m0: u64) -> u64 {
        let mut inv = 1u64;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
        }
        inv.wrapping_neg()
    }

    /// (a + b) mod p for a, b < p
    #[inline(always)]
    fn add_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (sum, carry) = limbs::add(a, b);
        let (reduced, borrow) = limbs::sub(&sum, &self.modulus);
        // Reduce when the sum overflowed 2^256 or is ≥ p
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        ct_select_limbs(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// (a - b) mod p for a, b < p
    #[inline(always)]
    fn sub_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (diff, borrow) = limbs::sub(a, b);
        let (diff_plus_p, _) = limbs::add(&diff, &self.modulus);
        ct_select_limbs(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// Montgomery product a·b·R⁻¹ mod p (CIOS), for a, b < p
    fn mont_mul(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let p = &self.modulus;
        let mut t = [0u64; LIMBS + 2];

        for i in 0..LIMBS {
            // t += a · b[i]
            let mut carry = 0u64;
            for j in 0..LIMBS {
                let (lo, hi) = limbs::mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (s, c) = limbs::adc(t[LIMBS], carry, 0);
            t[LIMBS] = s;
            t[LIMBS + 1] = c;

            // t = (t + m·p) / 2^64
            let m = t[0].wrapping_mul(self.inv);
            let (_, mut carry) = limbs::mac(t[0], m, p[0], 0);
            for j in 1..LIMBS {
                let (lo, hi) = limbs::mac(t[j], m, p[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (s, c) = limbs::adc(t[LIMBS], carry, 0);
            t[LIMBS - 1] = s;
            t[LIMBS] = t[LIMBS + 1] + c;
        }

        // t < 2p: one conditional subtraction
        let res: Limbs = [t[0], t[1], t[2], t[3]];
        let (reduced, borrow) = limbs::sub(&res, p);
        let need_reduce = (t[LIMBS] | (borrow ^ 1)) & 1;
        ct_select_limbs(&res, &reduced, Choice::from(need_reduce as u8))
    }

    #[inline]
    fn to_montgomery(&self, a: &Limbs) -> Limbs {
        self.mont_mul(a, &self.r2)
    }

    #[inline]
    fn from_montgomery(&self, a: &Limbs) -> Limbs {
        self.mont_mul(a, &[1, 0, 0, 0])
    }

    /// base^exp in Montgomery form; branches on `exp` only
    fn pow_limbs_vartime(&self, base: &Limbs, exp: &Limbs) -> Limbs {
        let mut result = self.r;
        for i in (0..limbs::bit_length_vartime(exp)).rev() {
            result = self.mont_mul(&result, &result);
            if (exp[i / 64] >> (i % 64)) & 1 == 1 {
                result = self.mont_mul(&result, base);
            }
        }
        result
    }
}

/// An element of GF(p), bound to the [`Field`] it was created from
///
/// Elements are small immutable values: every operation returns a new element.
/// Binary operations fail with [`Error::IncompatibleContext`] when the
/// operands come from fields with different moduli.
#[derive(Clone, Copy)]
pub struct FieldElement<'a> {
    field: &'a Field,
    /// Montgomery form, always < p
    value: Limbs,
}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", hex::encode(self.to_be_bytes()))
    }
}

impl<'a> FieldElement<'a> {
    /// The field this element lives in
    pub fn field(&self) -> &'a Field {
        self.field
    }

    /// Canonical big-endian encoding of the value in `[0, p)`
    pub fn to_be_bytes(&self) -> [u8; ENCODED_SIZE] {
        limbs::to_be_bytes(&self.field.from_montgomery(&self.value))
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        ct_is_zero_limbs(&self.value)
    }

    /// Whether `self` and `other` may be combined
    #[inline]
    pub fn same_field(&self, other: &Self) -> bool {
        core::ptr::eq(self.field, other.field) || self.field == other.field
    }

    #[inline]
    fn check_compatible(&self, rhs: &Self, operation: &'static str) -> Result<()> {
        if self.same_field(rhs) {
            Ok(())
        } else {
            Err(Error::IncompatibleContext { operation })
        }
    }

    #[inline(always)]
    fn with_value(&self, value: Limbs) -> Self {
        FieldElement {
            field: self.field,
            value,
        }
    }

    /// (self + rhs) mod p
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "FieldElement::add")?;
        Ok(self.with_value(self.field.add_limbs(&self.value, &rhs.value)))
    }

    /// (self - rhs) mod p
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "FieldElement::sub")?;
        Ok(self.with_value(self.field.sub_limbs(&self.value, &rhs.value)))
    }

    /// (self · rhs) mod p
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs, "FieldElement::mul")?;
        Ok(self.with_value(self.field.mont_mul(&self.value, &rhs.value)))
    }

    /// self² mod p
    pub fn square(&self) -> Self {
        self.with_value(self.field.mont_mul(&self.value, &self.value))
    }

    /// 2·self mod p
    pub fn double(&self) -> Self {
        self.with_value(self.field.add_limbs(&self.value, &self.value))
    }

    /// -self mod p (zero stays zero)
    pub fn negate(&self) -> Self {
        self.with_value(self.field.sub_limbs(&[0; LIMBS], &self.value))
    }

    /// Multiplicative inverse via Fermat's little theorem, `self^(p-2)`.
    ///
    /// Fails with [`Error::NonInvertible`] on zero.
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::NonInvertible {
                context: "FieldElement::invert",
            });
        }
        let (p_minus_2, _) = limbs::sub(&self.field.modulus, &[2, 0, 0, 0]);
        Ok(self.with_value(self.field.pow_limbs_vartime(&self.value, &p_minus_2)))
    }

    /// self^exp for a public big-endian exponent. Variable time in `exp`.
    pub fn pow_vartime(&self, exp: &[u8; ENCODED_SIZE]) -> Self {
        let e = limbs::from_be_bytes(exp);
        self.with_value(self.field.pow_limbs_vartime(&self.value, &e))
    }

    /// Square root for `p ≡ 3 (mod 4)`, computed as `self^((p+1)/4)`.
    ///
    /// Returns `None` for non-residues and for fields with `p ≢ 3 (mod 4)`.
    pub fn sqrt(&self) -> Option<Self> {
        if !self.field.is_3_mod_4() {
            return None;
        }
        // (p + 1) / 4 = floor(p / 4) + 1 when p ≡ 3 (mod 4)
        let (exp, _) = limbs::add(&limbs::shr(&self.field.modulus, 2), &[1, 0, 0, 0]);
        let candidate = self.with_value(self.field.pow_limbs_vartime(&self.value, &exp));
        if bool::from(candidate.square().ct_eq(self)) {
            Some(candidate)
        } else {
            None
        }
    }
}

impl ConstantTimeEq for FieldElement<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(self.same_field(other) as u8) & ct_eq_limbs(&self.value, &other.value)
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement<'_> {}

impl ConditionallySelectable for FieldElement<'_> {
    /// Selects limbs in constant time; the field of `a` is kept. Callers must
    /// only select between elements of the same field.
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement {
            field: a.field,
            value: ct_select_limbs(&a.value, &b.value, choice),
        }
    }
}
