// SPDX-License-Identifier: CC0-1.0

//! Hash functions
//!
//! Utility functions related to hashing data, including merkleization
//!

use hashes::{Hash, HashEngine};

use crate::hash_types::TxMerkleNode;

/// Calculates the merkle root of a list of hashes, the way Bitcoin does:
/// each level pairs adjacent nodes and hashes their concatenation with
/// double SHA-256, duplicating the last node of an odd-length level.
///
/// A single hash is its own root. Returns `None` for an empty list.
pub fn bitcoin_merkle_root<I>(hashes: I) -> Option<TxMerkleNode>
where
    I: IntoIterator<Item = TxMerkleNode>,
{
    let mut level: Vec<TxMerkleNode> = hashes.into_iter().collect();
    if level.is_empty() {
        return None;
    }

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = if pair.len() == 2 { pair[1] } else { pair[0] };
                let mut engine = TxMerkleNode::engine();
                engine.input(&left.into_inner());
                engine.input(&right.into_inner());
                TxMerkleNode::from_engine(engine)
            })
            .collect();
    }
    Some(level[0])
}
