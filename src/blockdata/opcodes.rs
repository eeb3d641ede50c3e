// SPDX-License-Identifier: CC0-1.0

//! Opcodes
//!
//! Script opcodes needed to build coinbase scripts. Only the push family is
//! listed; nothing in this library executes scripts.
//!

use std::fmt;

/// A script Opcode
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct All {
    code: u8,
}

impl All {
    /// Encodes [`All`] as a byte.
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for All {
    #[inline]
    fn from(b: u8) -> All {
        All { code: b }
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("OP_")?;
        match *self {
            all::OP_PUSHBYTES_0 => write!(f, "0"),
            all::OP_PUSHDATA1 => write!(f, "PUSHDATA1"),
            all::OP_PUSHDATA2 => write!(f, "PUSHDATA2"),
            all::OP_PUSHDATA4 => write!(f, "PUSHDATA4"),
            all::OP_PUSHNUM_NEG1 => write!(f, "1NEGATE"),
            All { code: x } if x >= all::OP_PUSHNUM_1.code && x <= all::OP_PUSHNUM_16.code => {
                write!(f, "{}", x - all::OP_PUSHNUM_1.code + 1)
            }
            All { code: x } if x < all::OP_PUSHDATA1.code => write!(f, "PUSHBYTES_{}", x),
            All { code: x } => write!(f, "UNKNOWN_{:02x}", x),
        }
    }
}

/// Allocated opcodes
pub mod all {
    use super::All;

    /// Push an empty array onto the stack
    pub const OP_PUSHBYTES_0: All = All { code: 0x00 };
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA1: All = All { code: 0x4c };
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA2: All = All { code: 0x4d };
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA4: All = All { code: 0x4e };
    /// Push the array [0x81] onto the stack
    pub const OP_PUSHNUM_NEG1: All = All { code: 0x4f };
    /// Push the array [0x01] onto the stack
    pub const OP_PUSHNUM_1: All = All { code: 0x51 };
    /// Push the array [0x10] onto the stack
    pub const OP_PUSHNUM_16: All = All { code: 0x60 };
}

/// Push an empty array onto the stack
pub const OP_FALSE: All = all::OP_PUSHBYTES_0;
/// Empty stack is also FALSE
pub const OP_0: All = all::OP_PUSHBYTES_0;
/// Number 1 is also TRUE
pub const OP_TRUE: All = all::OP_PUSHNUM_1;
