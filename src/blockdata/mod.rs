// SPDX-License-Identifier: CC0-1.0

//! Blockdata
//!
//! This module defines structures and functions for storing the blocks and
//! transactions which make up the chain, and the construction of each
//! network's genesis block.
//!

pub mod opcodes;
pub mod script;
pub mod transaction;
pub mod block;
pub mod constants;
