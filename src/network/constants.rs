// SPDX-License-Identifier: CC0-1.0

//! Network constants
//!
//! This module provides the [`Network`] discriminant, the magic bytes that
//! open every peer-to-peer message on each network, and the service flags a
//! node advertises.
//!
//! # Example: recognising a network from its magic bytes
//!
//! ```rust
//! use chainparams::network::constants::Network;
//!
//! let magic = u32::from_le_bytes([0xc3, 0x4a, 0x4e, 0x55]);
//! assert_eq!(Network::from_magic(magic), Some(Network::Testnet));
//! ```

use std::{error, fmt, ops};
use std::str::FromStr;

/// Message-start bytes of the production network. Rarely used upper ASCII,
/// not valid as UTF-8, and a large 4-byte int at any alignment.
pub const MAIN_MESSAGE_START: [u8; 4] = [0xd4, 0xf5, 0xc3, 0x34];
/// Message-start bytes of the test network.
pub const TESTNET_MESSAGE_START: [u8; 4] = [0xc3, 0x4a, 0x4e, 0x55];

/// The network to act on
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// The production network
    Main,
    /// The test network
    #[cfg_attr(feature = "serde", serde(rename = "test"))]
    Testnet,
}

impl Network {
    /// Every supported network, production first.
    pub const ALL: [Network; 2] = [Network::Main, Network::Testnet];

    /// The message-start bytes, as they appear on the wire.
    pub fn message_start(self) -> [u8; 4] {
        match self {
            Network::Main => MAIN_MESSAGE_START,
            Network::Testnet => TESTNET_MESSAGE_START,
        }
    }

    /// Return the network magic bytes, which should be encoded little-endian
    /// at the start of every message
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainparams::network::constants::Network;
    ///
    /// assert_eq!(Network::Main.magic(), 0x34c3f5d4);
    /// ```
    pub fn magic(self) -> u32 {
        u32::from_le_bytes(self.message_start())
    }

    /// Recognises a network from the magic value that opens its messages.
    pub fn from_magic(magic: u32) -> Option<Network> {
        Network::ALL.iter().cloned().find(|n| n.magic() == magic)
    }

    /// Converts a `Network` to the name used on the command line.
    pub fn to_core_arg(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
        }
    }

    /// Converts a command line network name to its equivalent `Network`.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        let network = match core_arg {
            "main" => Network::Main,
            "test" => Network::Testnet,
            _ => return Err(ParseNetworkError(core_arg.to_owned())),
        };
        Ok(network)
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_core_arg(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_core_arg())
    }
}

/// Flags to indicate which network services a node supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// NONE means no services supported.
    pub const NONE: ServiceFlags = ServiceFlags(0);

    /// NETWORK means that the node is capable of serving the complete block chain. Addresses
    /// a node learns about without further information are assumed to have it.
    pub const NETWORK: ServiceFlags = ServiceFlags(1 << 0);

    /// GETUTXO means the node is capable of responding to the getutxo protocol request.
    pub const GETUTXO: ServiceFlags = ServiceFlags(1 << 1);

    /// BLOOM means the node is capable and willing to handle bloom-filtered connections.
    pub const BLOOM: ServiceFlags = ServiceFlags(1 << 2);

    // NOTE: When adding new flags, remember to update the Display impl accordingly.

    /// Add [ServiceFlags] together.
    ///
    /// Returns itself.
    pub fn add(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 |= other.0;
        *self
    }

    /// Remove [ServiceFlags] from this.
    ///
    /// Returns itself.
    pub fn remove(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 &= !other.0;
        *self
    }

    /// Check whether [ServiceFlags] are included in this one.
    pub fn has(&self, flags: ServiceFlags) -> bool {
        (self.0 | flags.0) == self.0
    }

    /// Get the integer representation of this [ServiceFlags].
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::LowerHex for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == ServiceFlags::NONE {
            return write!(f, "ServiceFlags(NONE)");
        }

        let mut flags = *self;
        let mut first = true;
        macro_rules! write_flag {
            ($f:ident) => {
                if flags.has(ServiceFlags::$f) {
                    if !first {
                        write!(f, "|")?;
                    }
                    first = false;
                    write!(f, stringify!($f))?;
                    flags.remove(ServiceFlags::$f);
                }
            }
        }
        write!(f, "ServiceFlags(")?;
        write_flag!(NETWORK);
        write_flag!(GETUTXO);
        write_flag!(BLOOM);
        // If there are unknown flags left, we append them in hex.
        if flags != ServiceFlags::NONE {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "0x{:x}", flags)?;
        }
        write!(f, ")")
    }
}

impl From<u64> for ServiceFlags {
    fn from(f: u64) -> Self {
        ServiceFlags(f)
    }
}

impl From<ServiceFlags> for u64 {
    fn from(flags: ServiceFlags) -> u64 {
        flags.0
    }
}

impl ops::BitOr for ServiceFlags {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self.add(rhs)
    }
}

impl ops::BitOrAssign for ServiceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.add(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::{Network, ServiceFlags, MAIN_MESSAGE_START, TESTNET_MESSAGE_START};

    #[test]
    fn magic_test() {
        assert_eq!(Network::Main.message_start(), [0xd4, 0xf5, 0xc3, 0x34]);
        assert_eq!(Network::Testnet.message_start(), [0xc3, 0x4a, 0x4e, 0x55]);
        assert_ne!(MAIN_MESSAGE_START, TESTNET_MESSAGE_START);

        assert_eq!(Network::from_magic(Network::Main.magic()), Some(Network::Main));
        assert_eq!(Network::from_magic(Network::Testnet.magic()), Some(Network::Testnet));
        // Bitcoin mainnet
        assert_eq!(Network::from_magic(0xD9B4BEF9), None);
    }

    #[test]
    fn string_test() {
        assert_eq!(Network::Main.to_string(), "main");
        assert_eq!(Network::Testnet.to_string(), "test");

        assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("test".parse::<Network>().unwrap(), Network::Testnet);
        assert!("regtest".parse::<Network>().is_err());
        assert_eq!(
            "fakenet".parse::<Network>().unwrap_err().to_string(),
            "failed to parse fakenet as network"
        );
    }

    #[test]
    fn from_to_core_arg() {
        for net in Network::ALL.iter() {
            assert_eq!(Network::from_core_arg(net.to_core_arg()), Ok(*net));
        }
    }

    #[test]
    fn service_flags_test() {
        let all = [ServiceFlags::NETWORK, ServiceFlags::GETUTXO, ServiceFlags::BLOOM];

        let mut flags = ServiceFlags::NONE;
        for f in all.iter() {
            assert!(!flags.has(*f));
        }

        flags |= ServiceFlags::BLOOM;
        assert_eq!(flags, ServiceFlags::BLOOM);

        let mut flags2 = flags | ServiceFlags::GETUTXO;
        for f in all.iter() {
            assert_eq!(flags2.has(*f), *f == ServiceFlags::BLOOM || *f == ServiceFlags::GETUTXO);
        }

        flags2.remove(ServiceFlags::BLOOM);
        assert_eq!(flags2, ServiceFlags::GETUTXO);
        assert_eq!(u64::from(flags2), 2);

        // Test formatting.
        assert_eq!("ServiceFlags(NONE)", ServiceFlags::NONE.to_string());
        assert_eq!("ServiceFlags(NETWORK)", ServiceFlags::NETWORK.to_string());
        let flag = ServiceFlags::BLOOM | ServiceFlags::NETWORK;
        assert_eq!("ServiceFlags(NETWORK|BLOOM)", flag.to_string());
        let flag = ServiceFlags::BLOOM | 0xf0.into();
        assert_eq!("ServiceFlags(BLOOM|0xf0)", flag.to_string());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        let tests = vec![(Network::Main, "main"), (Network::Testnet, "test")];

        for (network, name) in tests {
            let want = format!("\"{}\"", name);
            let got = serde_json::to_string(&network).expect("failed to serialize network");
            assert_eq!(got, want);

            let back: Network = serde_json::from_str(&got).expect("failed to deserialize network");
            assert_eq!(back, network);
        }
        serde_test::assert_tokens(
            &Network::Testnet,
            &[serde_test::Token::UnitVariant { name: "Network", variant: "test" }],
        );
    }
}
