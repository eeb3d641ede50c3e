// SPDX-License-Identifier: CC0-1.0

//! Peer addresses
//!
//! This module defines the record a node keeps for a peer it may connect
//! to: where the peer is, what it serves, and when it was last seen.
//!

use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use crate::network::constants::ServiceFlags;

/// A peer address with the time it was last seen alive
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PeerAddress {
    /// Services provided by the peer whose address this is
    pub services: ServiceFlags,
    /// Network byte-order IPv6 address, or IPv4-mapped IPv6 address
    pub address: Ipv6Addr,
    /// Network port
    pub port: u16,
    /// Last time the peer was seen, in seconds since the epoch
    pub time: u32,
}

impl PeerAddress {
    /// Builds an address from the 16 raw bytes of an IPv6 (or IPv4-mapped)
    /// address and a port.
    pub fn from_raw(services: ServiceFlags, address: [u8; 16], port: u16, time: u32) -> PeerAddress {
        PeerAddress {
            services,
            address: Ipv6Addr::from(address),
            port,
            time,
        }
    }

    /// Extract socket address from a peer address. IPv4-mapped addresses
    /// come back as IPv4.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.address.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.address),
        };
        SocketAddr::new(ip, self.port)
    }
}

impl fmt::Debug for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PeerAddress {{services: {}, address: {}, time: {}}}",
            self.services, self.socket_addr(), self.time)
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

    use super::PeerAddress;
    use crate::network::constants::ServiceFlags;

    #[test]
    fn ipv4_mapped_socket_addr() {
        let raw = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 45, 32, 130, 61];
        let addr = PeerAddress::from_raw(ServiceFlags::NETWORK, raw, 8542, 1_000);
        assert_eq!(addr.address, Ipv4Addr::new(45, 32, 130, 61).to_ipv6_mapped());
        assert_eq!(addr.socket_addr(), "45.32.130.61:8542".parse::<SocketAddr>().unwrap());
        assert_eq!(
            format!("{:?}", addr),
            "PeerAddress {services: ServiceFlags(NETWORK), address: 45.32.130.61:8542, time: 1000}"
        );
    }

    #[test]
    fn ipv6_socket_addr() {
        let ip: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let addr = PeerAddress::from_raw(ServiceFlags::NONE, ip.octets(), 18542, 0);
        assert_eq!(addr.socket_addr(), "[2001:db8::1]:18542".parse::<SocketAddr>().unwrap());
    }
}
