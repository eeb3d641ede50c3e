// SPDX-License-Identifier: CC0-1.0

//! Utility functions
//!
//! Functions needed by all parts of the library.
//!

pub mod hash;
pub mod pow;

use std::{error, fmt};

use hashes::hex;

use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::constants::Network;
use crate::util::pow::CompactTarget;

/// An error raised while building a network's parameters.
///
/// Every variant means the constants compiled into the binary are
/// inconsistent; none of them can be fixed at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The genesis block does not hash to its checkpoint
    GenesisHash {
        /// Network whose genesis block was built
        network: Network,
        /// Hardcoded checkpoint
        expected: BlockHash,
        /// Hash of the block actually built
        computed: BlockHash,
    },
    /// The genesis block's merkle root does not match its checkpoint
    GenesisMerkleRoot {
        /// Network whose genesis block was built
        network: Network,
        /// Hardcoded checkpoint
        expected: TxMerkleNode,
        /// Merkle root of the block actually built
        computed: TxMerkleNode,
    },
    /// The genesis block hash does not meet the target in its own header
    GenesisProofOfWork {
        /// Network whose genesis block was built
        network: Network,
        /// Hash of the block
        hash: BlockHash,
        /// Target the hash should meet
        bits: CompactTarget,
    },
    /// A hardcoded hex constant is malformed
    Hex(hex::Error),
    /// A hardcoded alert key is not a valid secp256k1 public key
    AlertKey(secp256k1::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::GenesisHash { network, expected, computed } => write!(f,
                "{} genesis block hash checkpoint failed: expected {}, computed {}",
                network, expected, computed,
            ),
            Error::GenesisMerkleRoot { network, expected, computed } => write!(f,
                "{} genesis merkle root checkpoint failed: expected {}, computed {}",
                network, expected, computed,
            ),
            Error::GenesisProofOfWork { network, hash, bits } => write!(f,
                "{} genesis block hash {} does not meet its target {}",
                network, hash, bits,
            ),
            Error::Hex(ref e) => write!(f, "hex constant: {}", e),
            Error::AlertKey(ref e) => write!(f, "alert public key: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Hex(ref e) => Some(e),
            Error::AlertKey(ref e) => Some(e),
            Error::GenesisHash { .. }
            | Error::GenesisMerkleRoot { .. }
            | Error::GenesisProofOfWork { .. } => None,
        }
    }
}

#[doc(hidden)]
impl From<hex::Error> for Error {
    fn from(e: hex::Error) -> Error {
        Error::Hex(e)
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::AlertKey(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::Error;
    use crate::hash_types::BlockHash;
    use crate::network::constants::Network;

    #[test]
    fn display_names_the_checkpoint() {
        let err = Error::GenesisHash {
            network: Network::Testnet,
            expected: BlockHash::from_inner([1; 32]),
            computed: BlockHash::from_inner([2; 32]),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("test genesis block hash checkpoint failed"));
        assert!(msg.contains(&"01".repeat(32)));
        assert!(msg.contains(&"02".repeat(32)));
        assert!(err.source().is_none());
    }

    #[test]
    fn wraps_key_errors() {
        let err: Error = secp256k1::PublicKey::from_slice(&[0x04; 10]).unwrap_err().into();
        assert!(matches!(err, Error::AlertKey(_)));
        assert!(err.source().is_some());
    }
}
