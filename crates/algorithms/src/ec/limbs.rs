//! Fixed-width 256-bit integer helpers
//!
//! Values are four little-endian `u64` limbs. The carry/borrow chains below
//! run the same instruction sequence regardless of the limb values.

/// Number of 64-bit limbs in a field element or scalar
pub(crate) const LIMBS: usize = 4;

/// Size of a big-endian encoding in bytes
pub const ENCODED_SIZE: usize = LIMBS * 8;

/// 256-bit little-endian limb array
pub(crate) type Limbs = [u64; LIMBS];

/// `a + b + carry`, returning (sum, carry-out)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// `a - (b + borrow)`, returning (difference, borrow-out ∈ {0, 1})
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// `a + b·c + carry`, returning (low word, high word)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// 4-limb addition with carry
#[inline(always)]
pub(crate) fn add(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let mut r = [0u64; LIMBS];
    let mut carry = 0u64;
    for i in 0..LIMBS {
        let (s, c) = adc(a[i], b[i], carry);
        r[i] = s;
        carry = c;
    }
    (r, carry)
}

/// 4-limb subtraction with borrow
#[inline(always)]
pub(crate) fn sub(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let mut r = [0u64; LIMBS];
    let mut borrow = 0u64;
    for i in 0..LIMBS {
        let (d, b_out) = sbb(a[i], b[i], borrow);
        r[i] = d;
        borrow = b_out;
    }
    (r, borrow)
}

/// Big-endian bytes → little-endian limbs
pub(crate) fn from_be_bytes(bytes: &[u8; ENCODED_SIZE]) -> Limbs {
    let mut limbs = [0u64; LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (LIMBS - 1 - i) * 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[offset..offset + 8]);
        *limb = u64::from_be_bytes(word);
    }
    limbs
}

/// Little-endian limbs → big-endian bytes
pub(crate) fn to_be_bytes(limbs: &Limbs) -> [u8; ENCODED_SIZE] {
    let mut out = [0u8; ENCODED_SIZE];
    for (i, limb) in limbs.iter().enumerate() {
        let offset = (LIMBS - 1 - i) * 8;
        out[offset..offset + 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// Bit length of a public value. Variable time.
pub(crate) fn bit_length_vartime(limbs: &Limbs) -> usize {
    for i in (0..LIMBS).rev() {
        if limbs[i] != 0 {
            return i * 64 + (64 - limbs[i].leading_zeros() as usize);
        }
    }
    0
}

/// `a < b` for public values. Variable time.
pub(crate) fn lt_vartime(a: &Limbs, b: &Limbs) -> bool {
    let (_, borrow) = sub(a, b);
    borrow == 1
}

/// Logical right shift by `n < 64` bits
pub(crate) fn shr(a: &Limbs, n: u32) -> Limbs {
    debug_assert!(n < 64);
    if n == 0 {
        return *a;
    }
    let mut r = [0u64; LIMBS];
    for i in 0..LIMBS {
        let hi = if i + 1 < LIMBS { a[i + 1] << (64 - n) } else { 0 };
        r[i] = (a[i] >> n) | hi;
    }
    r
}
