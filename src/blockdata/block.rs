// SPDX-License-Identifier: CC0-1.0

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!

use std::fmt;

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{serialize, Encodable};
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::util::hash::bitcoin_merkle_root;
use crate::util::pow::{CompactTarget, Target};

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Hash)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// float (with well-defined rounding, of course)
    pub bits: CompactTarget,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}
impl_consensus_encoding!(BlockHeader, version, prev_blockhash, merkle_root, time, bits, nonce);

impl BlockHeader {
    /// The number of bytes a serialized header takes.
    pub const SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4; // 80

    /// Returns the block hash, BLAKE2s-256 of the serialized header.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::hash(&serialize(self))
    }

    /// Computes the target the block hash must meet.
    pub fn target(&self) -> Target {
        Target::from_compact(self.bits)
    }

    /// Whether the block hash meets the header's own target.
    pub fn meets_target(&self) -> bool {
        self.target().is_met_by(&self.block_hash())
    }
}

impl fmt::Debug for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BlockHeader")
            .field("block_hash", &self.block_hash())
            .field("version", &self.version)
            .field("prev_blockhash", &self.prev_blockhash)
            .field("merkle_root", &self.merkle_root)
            .field("time", &self.time)
            .field("bits", &self.bits)
            .field("nonce", &self.nonce)
            .finish()
    }
}

/// A block, a header plus the transactions it commits to
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}
impl_consensus_encoding!(Block, header, txdata);

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Calculates the merkle root of the block's transactions, `None` for a
    /// block without any.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        bitcoin_merkle_root(self.txdata.iter().map(|tx| TxMerkleNode::from(tx.txid())))
    }

    /// Checks if merkle root of header matches merkle root of the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockHeader};
    use crate::blockdata::transaction::{Transaction, TxIn, TxOut};
    use crate::consensus::encode::serialize;
    use crate::hash_types::{BlockHash, TxMerkleNode};
    use crate::util::pow::CompactTarget;
    use hashes::Hash;

    fn header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_blockhash: BlockHash::default(),
            merkle_root: TxMerkleNode::default(),
            time: 1457456114,
            bits: CompactTarget(0x1e0fffff),
            nonce: 7,
        }
    }

    #[test]
    fn header_layout() {
        let header = header();
        let ser = serialize(&header);
        assert_eq!(ser.len(), BlockHeader::SIZE);
        assert_eq!(ser[..4], [1, 0, 0, 0]);
        assert_eq!(ser[68..], [0xf2, 0x03, 0xdf, 0x56, 0xff, 0xff, 0x0f, 0x1e, 0x07, 0x00, 0x00, 0x00]);
        assert_eq!(header.block_hash(), BlockHash::hash(&ser));
    }

    #[test]
    fn nonce_changes_hash() {
        let a = header();
        let b = BlockHeader { nonce: 8, ..a };
        assert_ne!(a.block_hash(), b.block_hash());
    }

    #[test]
    fn merkle_root_check() {
        let tx = Transaction {
            version: 1,
            time: 0,
            input: vec![TxIn::default()],
            output: vec![TxOut::empty()],
            lock_time: 0,
        };
        let mut block = Block { header: header(), txdata: vec![tx.clone()] };
        assert!(!block.check_merkle_root());

        block.header.merkle_root = TxMerkleNode::from_inner(tx.txid().into_inner());
        assert!(block.check_merkle_root());

        block.txdata.clear();
        assert_eq!(block.compute_merkle_root(), None);
        assert!(!block.check_merkle_root());
    }
}
