//! Constant-time operations to prevent timing attacks
//!
//! Limb arrays are little-endian `u64` words. None of these helpers branch
//! on the *values* they are handed; indices and lengths are public.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time selection
///
/// Returns `a` if `choice` is unset, `b` if it is set.
#[inline]
pub fn ct_select<T>(a: &T, b: &T, choice: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(a, b, choice)
}

/// Constant-time conditional swap of two values
#[inline]
pub fn ct_swap<T>(a: &mut T, b: &mut T, choice: Choice)
where
    T: ConditionallySelectable,
{
    T::conditional_swap(a, b, choice)
}

/// Limb-wise constant-time selection: `a` if `choice` is unset, else `b`
#[inline]
pub fn ct_select_limbs<const N: usize>(a: &[u64; N], b: &[u64; N], choice: Choice) -> [u64; N] {
    let mut out = [0u64; N];
    for ((out_limb, a_limb), b_limb) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *out_limb = u64::conditional_select(a_limb, b_limb, choice);
    }
    out
}

/// Constant-time equality of two limb slices of the same length
///
/// Slices of different length compare unequal; the length is not secret.
#[inline]
pub fn ct_eq_limbs(a: &[u64], b: &[u64]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }
    a.ct_eq(b)
}

/// Returns a set `Choice` if every limb is zero
#[inline]
pub fn ct_is_zero_limbs(a: &[u64]) -> Choice {
    let acc = a.iter().fold(0u64, |acc, &limb| acc | limb);
    acc.ct_eq(&0)
}

/// Extract bit `index` of a little-endian limb array without branching on it
///
/// `index` is public. Bits beyond the end of the array read as zero.
#[inline]
pub fn ct_bit(limbs: &[u64], index: usize) -> Choice {
    let word = index / 64;
    if word >= limbs.len() {
        return Choice::from(0);
    }
    Choice::from(((limbs[word] >> (index % 64)) & 1) as u8)
}
