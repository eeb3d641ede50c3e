// SPDX-License-Identifier: CC0-1.0

//! # Chain parameters
//!
//! This library holds the consensus-critical constants of the two networks
//! a node can join, production (`main`) and test (`test`). Every other part
//! of a node asks it which chain it is on: the message-start marker peers
//! must send, the ports to listen on, the easiest permitted proof-of-work
//! target, the base58 version bytes and the bootstrap peers.
//!
//! Both profiles are built once, including their genesis blocks, which are
//! checked against hardcoded checkpoints before anything can read them.
//!
//! # Example: picking the network from a startup flag
//!
//! ```rust
//! use chainparams::{Network, Registry};
//!
//! let registry = Registry::new().expect("genesis checkpoints");
//! registry.select_from_testnet_flag(true);
//!
//! let params = registry.active();
//! assert_eq!(params.network(), Network::Testnet);
//! assert_eq!(params.default_port(), 18542);
//! ```
//!

#![crate_name = "chainparams"]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

// Re-exported dependencies.
#[macro_use] pub extern crate bitcoin_hashes as hashes;
pub extern crate secp256k1;

#[cfg(feature = "serde")] #[macro_use] extern crate serde;

#[cfg(target_pointer_width = "16")]
compile_error!("chainparams cannot be used on 16-bit architectures");

#[macro_use]
mod internal_macros;

pub mod network;
pub mod blockdata;
pub mod consensus;
pub mod util;
pub mod registry;
// Do not remove: required in order to get hash types implementation macros to work correctly
#[allow(unused_imports)]
pub mod hash_types;

pub use crate::hash_types::*;
pub use crate::blockdata::block::Block;
pub use crate::blockdata::block::BlockHeader;
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::Transaction;
pub use crate::blockdata::transaction::TxIn;
pub use crate::blockdata::transaction::TxOut;
pub use crate::blockdata::transaction::OutPoint;
pub use crate::consensus::encode::VarInt;
pub use crate::consensus::params::{Base58Type, DnsSeed, Params};
pub use crate::network::address::PeerAddress;
pub use crate::network::constants::{Network, ServiceFlags};
pub use crate::registry::{params, select_params, select_params_from_testnet_flag, Registry};
pub use crate::util::Error;
pub use crate::util::pow::{CompactTarget, Target};
