// SPDX-License-Identifier: CC0-1.0

//! Active network selection
//!
//! A [`Registry`] owns the parameters of every network and remembers which
//! one the node runs on. Callers that can thread a value through their call
//! graph should hold a `Registry`; the rest can use the process-wide one
//! through [`params`] and [`select_params`].
//!

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::{error, info};

use crate::consensus::params::Params;
use crate::network::constants::Network;
use crate::util::Error;

/// The parameters of both networks plus the active selection, which starts
/// on [`Network::Main`].
#[derive(Debug)]
pub struct Registry {
    main: Params,
    testnet: Params,
    active: RwLock<Network>,
}

impl Registry {
    /// Builds the parameters of both networks.
    pub fn new() -> Result<Registry, Error> {
        Ok(Registry {
            main: Params::new(Network::Main)?,
            testnet: Params::new(Network::Testnet)?,
            active: RwLock::new(Network::Main),
        })
    }

    /// Parameters of the given network, selected or not.
    pub fn get(&self, network: Network) -> &Params {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
        }
    }

    /// The currently selected network.
    pub fn active_network(&self) -> Network {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parameters of the currently selected network.
    pub fn active(&self) -> &Params {
        self.get(self.active_network())
    }

    /// Makes `network` the active one. The last selection wins.
    pub fn select(&self, network: Network) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        let previous = *active;
        if previous != network {
            info!(from = %previous, to = %network, "switched active network");
        }
        *active = network;
    }

    /// Selects the test network if `testnet` is set, the production network
    /// otherwise, and returns the selection.
    pub fn select_from_testnet_flag(&self, testnet: bool) -> Network {
        let network = if testnet { Network::Testnet } else { Network::Main };
        self.select(network);
        network
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| match Registry::new() {
    Ok(registry) => registry,
    Err(e) => {
        error!(error = %e, "compiled-in chain parameters are inconsistent");
        panic!("invalid chain parameters: {}", e);
    }
});

/// The process-wide registry, built on first use.
///
/// # Panics
///
/// On first use, if a genesis block does not match its checkpoint.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Parameters of the network selected in the process-wide registry.
pub fn params() -> &'static Params {
    registry().active()
}

/// Selects the active network of the process-wide registry.
pub fn select_params(network: Network) {
    registry().select(network)
}

/// Selects the active network of the process-wide registry from a testnet
/// flag.
pub fn select_params_from_testnet_flag(testnet: bool) -> Network {
    registry().select_from_testnet_flag(testnet)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::{params, registry, select_params, select_params_from_testnet_flag, Registry};
    use crate::network::constants::Network;

    #[test]
    fn defaults_to_main() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.active_network(), Network::Main);
        assert_eq!(registry.active().network(), Network::Main);
        assert_eq!(registry.active().default_port(), 8542);
    }

    #[test]
    fn selection_is_reversible() {
        let registry = Registry::new().unwrap();
        registry.select(Network::Testnet);
        assert_eq!(registry.active().network(), Network::Testnet);
        registry.select(Network::Testnet);
        assert_eq!(registry.active().network(), Network::Testnet);
        registry.select(Network::Main);
        assert_eq!(registry.active().network(), Network::Main);
        registry.select(Network::Testnet);
        registry.select(Network::Main);
        assert_eq!(registry.active_network(), Network::Main);
    }

    #[test]
    fn testnet_flag_matches_select() {
        let by_flag = Registry::new().unwrap();
        let by_select = Registry::new().unwrap();
        for &flag in [true, false, true].iter() {
            let network = by_flag.select_from_testnet_flag(flag);
            by_select.select(if flag { Network::Testnet } else { Network::Main });
            assert_eq!(network, by_select.active_network());
            assert_eq!(by_flag.active().network(), by_select.active().network());
            assert_eq!(by_flag.active().genesis_hash(), by_select.active().genesis_hash());
        }
    }

    #[test]
    fn get_ignores_selection() {
        let registry = Registry::new().unwrap();
        registry.select(Network::Testnet);
        assert_eq!(registry.get(Network::Main).network(), Network::Main);
        assert_eq!(registry.get(Network::Testnet).rpc_port(), 18543);
    }

    #[test]
    fn shared_between_threads() {
        let registry = Arc::new(Registry::new().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.select_from_testnet_flag(i % 2 == 0);
                    registry.active().network()
                })
            })
            .collect();
        for handle in handles {
            let network = handle.join().unwrap();
            assert!(Network::ALL.contains(&network));
        }
        let last = registry.active_network();
        assert_eq!(registry.active().network(), last);
    }

    // The only test touching the process-wide registry, so selections
    // cannot race with other tests.
    #[test]
    fn process_wide_registry() {
        assert_eq!(params().network(), Network::Main);

        assert_eq!(select_params_from_testnet_flag(true), Network::Testnet);
        assert_eq!(params().network(), Network::Testnet);
        assert_eq!(params().default_port(), 18542);
        assert!(std::ptr::eq(params(), registry().get(Network::Testnet)));

        select_params(Network::Main);
        assert_eq!(params().network(), Network::Main);
        assert_eq!(params().magic(), Network::Main.magic());
    }
}
