// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block and its
//! single transaction, and checks a built genesis block against the
//! checkpoints every node hardcodes.
//!

use std::default::Default;
use std::str::FromStr;

use hashes::hex::FromHex;

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::script;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::constants::Network;
use crate::util::pow::CompactTarget;
use crate::util::Error;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// Message embedded in the genesis coinbase
pub const GENESIS_COINBASE_MESSAGE: &[u8] = b"BTC Block #401729";
/// Small constant pushed ahead of the message in the genesis coinbase
pub const GENESIS_COINBASE_MARKER: i64 = 42;
/// Timestamp of the genesis coinbase transaction
pub const GENESIS_TX_TIME: u32 = 1457456114;

/// Literal inputs of a genesis block header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GenesisParams {
    /// Block version
    pub version: i32,
    /// Block timestamp
    pub time: u32,
    /// Compact form of the network's proof-of-work limit
    pub bits: CompactTarget,
    /// Nonce found by mining the block
    pub nonce: u32,
}

/// The hash and merkle root a genesis block must have, as written in
/// block explorers (byte-reversed hex).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GenesisCheckpoint {
    /// Expected block hash
    pub hash: &'static str,
    /// Expected merkle root
    pub merkle_root: &'static str,
}

/// Constructs and returns the coinbase (and only) transaction of the genesis block
pub fn genesis_tx() -> Transaction {
    // Base
    let mut ret = Transaction {
        version: 1,
        time: GENESIS_TX_TIME,
        input: vec![],
        output: vec![],
        lock_time: 0,
    };

    // Inputs
    let in_script = script::Builder::new().push_int(0)
                                          .push_scriptint(GENESIS_COINBASE_MARKER)
                                          .push_slice(GENESIS_COINBASE_MESSAGE)
                                          .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: MAX_SEQUENCE,
    });

    // Outputs
    ret.output.push(TxOut::empty());

    // end
    ret
}

/// Constructs and returns a genesis block from its literal header inputs.
pub fn genesis_block(params: &GenesisParams) -> Block {
    let txdata = vec![genesis_tx()];
    let merkle_root = TxMerkleNode::from(txdata[0].txid());
    Block {
        header: BlockHeader {
            version: params.version,
            prev_blockhash: Default::default(),
            merkle_root,
            time: params.time,
            bits: params.bits,
            nonce: params.nonce,
        },
        txdata,
    }
}

/// Checks a built genesis block against its checkpoint and returns its hash.
///
/// The block hash is checked first, then the merkle root, then that the hash
/// meets the target in the block's own header.
pub fn verify_genesis(
    network: Network,
    block: &Block,
    checkpoint: &GenesisCheckpoint,
) -> Result<BlockHash, Error> {
    let expected_hash = BlockHash::from_str(checkpoint.hash)?;
    let expected_root = TxMerkleNode::from_hex(checkpoint.merkle_root)?;

    let hash = block.block_hash();
    if hash != expected_hash {
        return Err(Error::GenesisHash { network, expected: expected_hash, computed: hash });
    }

    let merkle_root = block.header.merkle_root;
    if merkle_root != expected_root || !block.check_merkle_root() {
        return Err(Error::GenesisMerkleRoot { network, expected: expected_root, computed: merkle_root });
    }

    if !block.header.target().is_met_by(&hash) {
        return Err(Error::GenesisProofOfWork { network, hash, bits: block.header.bits });
    }

    Ok(hash)
}
