// SPDX-License-Identifier: CC0-1.0

//! Consensus
//!
//! This module defines structures, functions, and traits which are needed to
//! conform to the consensus rules: the serialization of blocks and
//! transactions, and the per-network parameter profiles.
//!

pub mod encode;
pub mod params;

pub use self::encode::{Encodable, serialize, serialize_hex};
