// SPDX-License-Identifier: CC0-1.0

//! File defines types for hashes used throughout the library.
//!
//! Transaction ids and Merkle nodes are double SHA-256, as in Bitcoin. Block
//! hashes are BLAKE2s-256 of the serialized header. Both display
//! byte-reversed, which is how checkpoints are written down.
//!

use std::{fmt, io, str};

use blake2::{Blake2s256, Digest};
use hashes::{Hash, sha256d};
use hashes::hex::{self, FromHex};

use crate::consensus::encode::Encodable;

macro_rules! impl_hashencode {
    ($hashtype:ident) => {
        impl $crate::consensus::encode::Encodable for $hashtype {
            fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, io::Error> {
                self.into_inner().consensus_encode(s)
            }
        }
    }
}

hash_newtype!(Txid, sha256d::Hash, 32, doc="A transaction hash/transaction ID.");
hash_newtype!(TxMerkleNode, sha256d::Hash, 32, doc="A hash of the Merkle tree branch or root for transactions");

impl_hashencode!(Txid);
impl_hashencode!(TxMerkleNode);

impl From<Txid> for TxMerkleNode {
    fn from(txid: Txid) -> TxMerkleNode {
        TxMerkleNode::from_inner(txid.into_inner())
    }
}

/// A block hash, BLAKE2s-256 of the 80-byte serialized header.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    /// Length of the hash in bytes.
    pub const LEN: usize = 32;

    /// Hashes `data` with BLAKE2s-256.
    pub fn hash(data: &[u8]) -> BlockHash {
        let digest = Blake2s256::digest(data);
        let mut ret = [0u8; 32];
        ret.copy_from_slice(&digest[..]);
        BlockHash(ret)
    }

    /// Wraps raw hash bytes, in internal (little-endian) order.
    pub fn from_inner(inner: [u8; 32]) -> BlockHash {
        BlockHash(inner)
    }

    /// Returns the raw hash bytes, in internal (little-endian) order.
    pub fn into_inner(self) -> [u8; 32] {
        self.0
    }

    /// Borrows the raw hash bytes.
    pub fn as_inner(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::LowerHex for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl str::FromStr for BlockHash {
    type Err = hex::Error;

    /// Parses the byte-reversed hex form, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches("0x");
        let mut bytes = Vec::<u8>::from_hex(s)?;
        if bytes.len() != BlockHash::LEN {
            return Err(hex::Error::InvalidLength(BlockHash::LEN * 2, s.len()));
        }
        bytes.reverse();
        let mut ret = [0u8; 32];
        ret.copy_from_slice(&bytes);
        Ok(BlockHash(ret))
    }
}

impl_hashencode!(BlockHash);
