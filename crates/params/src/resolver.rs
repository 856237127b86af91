//! Activation resolution for the currently configured network.

use std::sync::Arc;

use tracing::*;

use crate::{ActivationParams, ActivationRegistry, NetworkIdentity, ParamsError};

/// Evaluates checkpoint activation for the network the process runs.
///
/// Pure lookups over the immutable registry: no locks, no I/O.  Safe to
/// share and query from block-processing threads.
#[derive(Clone, Debug)]
pub struct ActivationResolver {
    registry: Arc<ActivationRegistry>,
    network: NetworkIdentity,
    use_testnet: bool,
}

impl ActivationResolver {
    pub fn new(
        registry: Arc<ActivationRegistry>,
        network: NetworkIdentity,
        use_testnet: bool,
    ) -> Self {
        Self {
            registry,
            network,
            use_testnet,
        }
    }

    pub fn network(&self) -> &NetworkIdentity {
        &self.network
    }

    /// Params for the configured network.
    pub fn resolve(&self) -> Result<&ActivationParams, ParamsError> {
        self.registry.resolve(&self.network, self.use_testnet)
    }

    /// Params for the configured network, if checkpoint enforcement is
    /// active at the given chain position.
    ///
    /// A resolution failure means the feature is off for this network; it is
    /// logged and yields `None` rather than an error.
    pub fn active_params(&self, height: u64, timestamp: u64) -> Option<&ActivationParams> {
        let params = match self.resolve() {
            Ok(params) => params,
            Err(e) => {
                debug!(network = %self.network, err = %e, "checkpoint activation unresolved");
                return None;
            }
        };

        if params.threshold().is_reached(height, timestamp) {
            trace!(%height, %timestamp, threshold = %params.threshold(), "sync checkpoint is active");
            Some(params)
        } else {
            None
        }
    }

    /// Whether checkpoint enforcement is active at the given chain position.
    pub fn is_activation_active(&self, height: u64, timestamp: u64) -> bool {
        self.active_params(height, timestamp).is_some()
    }
}
