// SPDX-License-Identifier: CC0-1.0

//! Fixed seeds
//!
//! Literal peer addresses compiled into the binary, used to bootstrap before
//! any peer discovery has happened. A node only needs to reach one or two of
//! them: once connected it receives a pile of addresses with newer
//! timestamps, so the seeds are handed out with a random last-seen time
//! between one and two weeks ago.
//!

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::trace;

use crate::network::address::PeerAddress;
use crate::network::constants::ServiceFlags;

/// One week, in seconds.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A compiled-in seed: 16 raw address bytes and a port.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeedSpec {
    /// IPv6 address bytes, IPv4 addresses are IPv4-mapped
    pub addr: [u8; 16],
    /// Network port
    pub port: u16,
}

/// Fixed seeds of the production network.
pub const MAIN_SEEDS: &[SeedSpec] = &[
    SeedSpec { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x20, 0x82, 0x3d], port: 8542 },
];

/// Fixed seeds of the test network.
pub const TESTNET_SEEDS: &[SeedSpec] = &[
    SeedSpec { addr: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x2d, 0x20, 0x82, 0x3d], port: 18542 },
];

/// Converts a seed table into peer addresses, stamped against the system
/// clock with the thread-local random number generator.
pub fn convert_seeds(table: &[SeedSpec]) -> Vec<PeerAddress> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    convert_seeds_with(table, now, &mut rand::thread_rng())
}

/// Converts a seed table into peer addresses.
///
/// Each address gets `time = now - ONE_WEEK - r`, with `r` drawn uniformly
/// from `[0, ONE_WEEK)` independently per entry.
pub fn convert_seeds_with<R: Rng + ?Sized>(table: &[SeedSpec], now: i64, rng: &mut R) -> Vec<PeerAddress> {
    let seeds: Vec<PeerAddress> = table
        .iter()
        .map(|seed| {
            let time = now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK;
            PeerAddress::from_raw(ServiceFlags::NETWORK, seed.addr, seed.port, time as u32)
        })
        .collect();
    trace!(count = seeds.len(), now, "converted fixed seeds");
    seeds
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn table() -> Vec<SeedSpec> {
        (1..=8u8)
            .map(|i| SeedSpec {
                addr: Ipv4Addr::new(10, 0, 0, i).to_ipv6_mapped().octets(),
                port: 8542 + i as u16,
            })
            .collect()
    }

    #[test]
    fn last_seen_between_one_and_two_weeks_ago() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            for addr in convert_seeds_with(&table(), NOW, &mut rng) {
                let time = addr.time as i64;
                assert!(time <= NOW - ONE_WEEK, "{} too recent", time);
                assert!(time > NOW - 2 * ONE_WEEK, "{} too old", time);
            }
        }
    }

    #[test]
    fn preserves_length_addresses_and_ports() {
        let table = table();
        let seeds = convert_seeds_with(&table, NOW, &mut StdRng::seed_from_u64(1));
        assert_eq!(seeds.len(), table.len());
        for (seed, spec) in seeds.iter().zip(table.iter()) {
            assert_eq!(seed.address.octets(), spec.addr);
            assert_eq!(seed.port, spec.port);
            assert_eq!(seed.services, ServiceFlags::NETWORK);
        }
        assert!(convert_seeds_with(&[], NOW, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn timestamps_vary_between_runs() {
        let table = table();
        let first = convert_seeds_with(&table, NOW, &mut StdRng::seed_from_u64(1));
        let second = convert_seeds_with(&table, NOW, &mut StdRng::seed_from_u64(2));

        let times = |seeds: &[PeerAddress]| seeds.iter().map(|s| s.time).collect::<Vec<_>>();
        let endpoints = |seeds: &[PeerAddress]| seeds.iter().map(|s| s.socket_addr()).collect::<Vec<_>>();
        assert_ne!(times(&first), times(&second));
        assert_eq!(endpoints(&first), endpoints(&second));
    }

    #[test]
    fn system_clock_conversion() {
        let seeds = convert_seeds(MAIN_SEEDS);
        assert_eq!(seeds.len(), MAIN_SEEDS.len());
        assert_eq!(seeds[0].socket_addr().to_string(), "45.32.130.61:8542");
        assert_eq!(convert_seeds(TESTNET_SEEDS)[0].port, 18542);
    }
}
