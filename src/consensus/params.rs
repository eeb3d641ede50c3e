// SPDX-License-Identifier: CC0-1.0

//! Consensus parameters
//!
//! This module provides the predefined set of parameters for each chain.
//! A [`Params`] is built once per network: its genesis block is constructed
//! and checked against the hardcoded checkpoints, its alert key is parsed and
//! its fixed seeds are stamped, after which it never changes.
//!

use std::path::{Path, PathBuf};

use hashes::hex::FromHex;
use secp256k1::PublicKey;
use tracing::debug;

use crate::blockdata::block::Block;
use crate::blockdata::constants::{genesis_block, verify_genesis, GenesisCheckpoint, GenesisParams};
use crate::hash_types::BlockHash;
use crate::network::address::PeerAddress;
use crate::network::constants::Network;
use crate::network::seeds::{self, SeedSpec};
use crate::util::pow::Target;
use crate::util::Error;

/// Kinds of base58 version prefixes a network assigns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// Wallet-import-format private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

impl Base58Type {
    fn index(self) -> usize {
        match self {
            Base58Type::PubkeyAddress => 0,
            Base58Type::ScriptAddress => 1,
            Base58Type::SecretKey => 2,
            Base58Type::ExtPublicKey => 3,
            Base58Type::ExtSecretKey => 4,
        }
    }
}

/// A DNS seed: a display name and the host to resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DnsSeed {
    /// Name shown to users
    pub name: &'static str,
    /// Host queried for peer addresses
    pub host: &'static str,
}

// Literal per-network constants, before anything is derived from them.
#[derive(Copy, Clone)]
struct Template {
    message_start: [u8; 4],
    alert_public_key: &'static str,
    default_port: u16,
    rpc_port: u16,
    pow_limit_shift: u32,
    genesis_version: i32,
    genesis_time: u32,
    genesis_nonce: u32,
    checkpoint: GenesisCheckpoint,
    dns_seeds: &'static [DnsSeed],
    fixed_seeds: &'static [SeedSpec],
    base58_prefixes: [&'static [u8]; 5],
    last_pow_block: u32,
    data_dir: Option<&'static str>,
}

const MAIN: Template = Template {
    message_start: [0xd4, 0xf5, 0xc3, 0x34],
    alert_public_key: "04a77fb4bfc0c93aa3fe641725d01bb32e422f73e669ad0d84d6309778761386ef82899e7e2edd2f4fb06955b1a788b677ca5832fbc378533f1c07d62edcddff56",
    default_port: 8542,
    rpc_port: 8543,
    pow_limit_shift: 20,
    genesis_version: 1,
    genesis_time: 1457456114,
    genesis_nonce: 988240077,
    checkpoint: GenesisCheckpoint {
        hash: "00000792e26cb3815ba656a2c72b3b2660ab93d359524bf119d1b831c9bc87a5",
        merkle_root: "16d2e2608c3406d0ea537d65f75fd5dce6d3ef839cd054a9719764c121087db9",
    },
    dns_seeds: &[DnsSeed { name: "45.32.130.61", host: "45.32.130.61" }],
    fixed_seeds: seeds::MAIN_SEEDS,
    base58_prefixes: [
        &[115],
        &[5],
        &[177],
        &[0x04, 0x88, 0xB2, 0x1E],
        &[0x04, 0x88, 0xAD, 0xE4],
    ],
    last_pow_block: 90_000,
    data_dir: None,
};

const TESTNET: Template = Template {
    message_start: [0xc3, 0x4a, 0x4e, 0x55],
    alert_public_key: "04a353b8a3edc80e1b3821d1239215acd905b8bab79acbc680202080eaebb3546b67aea9e3d2c4ebfba47eaaa7aab15cc3697ba97a77a7a08256cbb1a3ca67191c",
    default_port: 18542,
    rpc_port: 18543,
    pow_limit_shift: 8,
    genesis_nonce: 1528,
    checkpoint: GenesisCheckpoint {
        hash: "00c8fa68da7cde713246cc808c9dc1b1c51f258aa89ef8395d4adc56f3e65c9a",
        merkle_root: "16d2e2608c3406d0ea537d65f75fd5dce6d3ef839cd054a9719764c121087db9",
    },
    fixed_seeds: seeds::TESTNET_SEEDS,
    base58_prefixes: [
        &[137],
        &[196],
        &[239],
        &[0x04, 0x35, 0x87, 0xCF],
        &[0x04, 0x35, 0x83, 0x94],
    ],
    last_pow_block: 0x7fff_ffff,
    data_dir: Some("testnet"),
    ..MAIN
};

fn template(network: Network) -> &'static Template {
    match network {
        Network::Main => &MAIN,
        Network::Testnet => &TESTNET,
    }
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone)]
pub struct Params {
    network: Network,
    message_start: [u8; 4],
    alert_public_key: PublicKey,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    genesis_block: Block,
    genesis_hash: BlockHash,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<PeerAddress>,
    base58_prefixes: [&'static [u8]; 5],
    last_pow_block: u32,
    data_dir: Option<&'static str>,
}

impl Params {
    /// Creates the parameter set for the given network.
    ///
    /// Fails if the genesis block built from the compiled-in constants does
    /// not match its checkpoint, or if the alert key is not a valid point.
    pub fn new(network: Network) -> Result<Params, Error> {
        Params::from_template(network, template(network))
    }

    fn from_template(network: Network, t: &Template) -> Result<Params, Error> {
        let alert_public_key = PublicKey::from_slice(&Vec::<u8>::from_hex(t.alert_public_key)?)?;

        let pow_limit = Target::max_shifted_right(t.pow_limit_shift);
        let genesis_block = genesis_block(&GenesisParams {
            version: t.genesis_version,
            time: t.genesis_time,
            bits: pow_limit.to_compact(),
            nonce: t.genesis_nonce,
        });
        let genesis_hash = verify_genesis(network, &genesis_block, &t.checkpoint)?;

        let params = Params {
            network,
            message_start: t.message_start,
            alert_public_key,
            default_port: t.default_port,
            rpc_port: t.rpc_port,
            pow_limit,
            genesis_block,
            genesis_hash,
            dns_seeds: t.dns_seeds.to_vec(),
            fixed_seeds: seeds::convert_seeds(t.fixed_seeds),
            base58_prefixes: t.base58_prefixes,
            last_pow_block: t.last_pow_block,
            data_dir: t.data_dir,
        };
        debug!(
            network = %network,
            genesis = %params.genesis_hash,
            port = params.default_port,
            "built chain parameters"
        );
        Ok(params)
    }

    /// Network for which parameters are valid.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Bytes opening every peer-to-peer message.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Message start read as a little-endian `u32`.
    pub fn magic(&self) -> u32 {
        u32::from_le_bytes(self.message_start)
    }

    /// Key that signs network alerts.
    pub fn alert_public_key(&self) -> &PublicKey {
        &self.alert_public_key
    }

    /// Default peer-to-peer port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default RPC port.
    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest proof-of-work target the network permits.
    pub fn pow_limit(&self) -> &Target {
        &self.pow_limit
    }

    /// The genesis block.
    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    /// Hash of the genesis block.
    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    /// DNS seeds, in the order they should be queried.
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Compiled-in bootstrap peers, stamped as seen one to two weeks before
    /// these parameters were built.
    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    /// Version prefix of the given base58 kind.
    pub fn base58_prefix(&self, ty: Base58Type) -> &'static [u8] {
        self.base58_prefixes[ty.index()]
    }

    /// Height of the last proof-of-work block.
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    /// Subdirectory this network keeps its data in, if it does not use the
    /// base data directory itself.
    pub fn data_dir_suffix(&self) -> Option<&'static str> {
        self.data_dir
    }

    /// Resolves the data directory for this network under `base`.
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        match self.data_dir {
            Some(suffix) => base.join(suffix),
            None => base.to_path_buf(),
        }
    }
}
