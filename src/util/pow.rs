// SPDX-License-Identifier: CC0-1.0

//! Proof-of-work related integer types.
//!
//! A [`Target`] is a 256-bit unsigned integer; a block hash, read as a
//! little-endian integer, must not exceed it. Block headers carry targets in
//! the packed 32-bit [`CompactTarget`] form ("nBits"): one size byte followed
//! by a three byte mantissa.
//!

use std::{fmt, io};

use rug::integer::Order;
use rug::Integer;

use crate::consensus::encode::Encodable;
use crate::hash_types::BlockHash;

/// Encoding of a 256-bit target as a 32-bit float-like number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompactTarget(pub u32);

impl CompactTarget {
    /// Returns the consensus-encoded `u32` representation.
    pub fn to_consensus(self) -> u32 {
        self.0
    }
}

impl fmt::LowerHex for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Debug for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CompactTarget({:#010x})", self.0)
    }
}

impl fmt::Display for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl Encodable for CompactTarget {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, io::Error> {
        self.0.consensus_encode(s)
    }
}

/// A 256-bit proof-of-work target.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Target(Integer);

impl Target {
    /// The largest 256-bit value, `2^256 - 1`.
    pub fn max_value() -> Target {
        Target((Integer::from(1) << 256u32) - 1u32)
    }

    /// `2^256 - 1` shifted right by `shift` bits. Proof-of-work limits are
    /// written down this way: the larger the shift, the harder the target.
    pub fn max_shifted_right(shift: u32) -> Target {
        Target(Target::max_value().0 >> shift)
    }

    /// Reads a target from its 32-byte big-endian representation.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Target {
        Target(Integer::from_digits(&bytes[..], Order::MsfBe))
    }

    /// Decodes a compact target.
    ///
    /// The sign bit of the mantissa is ignored: targets are never negative.
    pub fn from_compact(compact: CompactTarget) -> Target {
        let size = compact.0 >> 24;
        let mantissa = compact.0 & 0x007f_ffff;
        if size <= 3 {
            Target(Integer::from(mantissa >> (8 * (3 - size))))
        } else {
            Target(Integer::from(mantissa) << (8 * (size - 3)))
        }
    }

    /// Encodes the target in compact form, dropping all but its three most
    /// significant bytes.
    pub fn to_compact(&self) -> CompactTarget {
        let mut size = (self.0.significant_bits() + 7) / 8;
        let mut compact = if size <= 3 {
            self.0.to_u32_wrapping() << (8 * (3 - size))
        } else {
            (self.0.clone() >> (8 * (size - 3))).to_u32_wrapping()
        };
        // The 0x00800000 bit denotes the sign, so if it is already set,
        // divide the mantissa by 256 and increase the exponent.
        if compact & 0x0080_0000 != 0 {
            compact >>= 8;
            size += 1;
        }
        CompactTarget(compact | (size << 24))
    }

    /// Whether `hash`, read as a little-endian integer, is at or below this
    /// target.
    pub fn is_met_by(&self, hash: &BlockHash) -> bool {
        Integer::from_digits(&hash.as_inner()[..], Order::LsfLe) <= self.0
    }
}

impl fmt::LowerHex for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
