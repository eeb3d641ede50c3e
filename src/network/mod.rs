// SPDX-License-Identifier: CC0-1.0

//! Network Support
//!
//! This module defines the networks a node can join, and the bootstrap peer
//! addresses compiled into the binary for each of them.
//!

pub mod constants;
pub mod address;
pub mod seeds;
