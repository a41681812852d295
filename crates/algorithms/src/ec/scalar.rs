//! Scalars for point multiplication

use super::limbs::{self, Limbs, ENCODED_SIZE, LIMBS};
use crate::error::{validate, Result};
use core::fmt;
use cozec_internal::constant_time::ct_bit;
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A non-negative integer below 2²⁵⁶ used as a multiplier.
///
/// Scalars are usually secret, so the value is wiped on drop and kept out of
/// `Debug` output. Range checks against a curve order are the caller's job.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    limbs: Limbs,
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}

impl Scalar {
    /// Create a scalar from its 32-byte big-endian encoding
    pub fn from_be_bytes(bytes: &[u8; ENCODED_SIZE]) -> Self {
        Scalar {
            limbs: limbs::from_be_bytes(bytes),
        }
    }

    /// Create a scalar from a big-endian byte string of at most 32 bytes
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        validate::max_length("Scalar", bytes.len(), ENCODED_SIZE)?;
        let mut padded = [0u8; ENCODED_SIZE];
        padded[ENCODED_SIZE - bytes.len()..].copy_from_slice(bytes);
        let scalar = Self::from_be_bytes(&padded);
        padded.zeroize();
        Ok(scalar)
    }

    /// Create a scalar from a small integer
    pub fn from_u64(n: u64) -> Self {
        let mut l = [0u64; LIMBS];
        l[0] = n;
        Scalar { limbs: l }
    }

    /// Big-endian encoding
    pub fn to_be_bytes(&self) -> [u8; ENCODED_SIZE] {
        limbs::to_be_bytes(&self.limbs)
    }

    /// Bit `index` (little-endian numbering) as a `Choice`; `index` is public
    pub fn bit(&self, index: usize) -> Choice {
        ct_bit(&self.limbs, index)
    }

    /// Constant-time parity test
    pub fn is_even(&self) -> Choice {
        !self.bit(0)
    }
}
