//! Per-network activation parameter registry.

use std::collections::BTreeMap;

use hex_literal::hex;
use keel_identifiers::SignerKey;

use crate::{ActivationThreshold, NetworkIdentity, ParamsError};

/// Height past which checkpoint enforcement begins on the primary network.
const PRIMARY_ACTIVATION_HEIGHT: u64 = 3_500_000;

/// Timestamp past which checkpoint enforcement begins on derivative
/// networks.
const DERIVATIVE_ACTIVATION_TIMESTAMP: u64 = 1_700_000_000;

// TODO replace the placeholder signer key once the production key ceremony
// has produced the real one
const PLACEHOLDER_SIGNER_KEY: [u8; 33] =
    hex!("039a01cd626d5efbe7fd05a59d8e5fced53bacac589192278f9b00ad31654b6956");

/// Signer key of the internal test chain.
const KEELTEST_SIGNER_KEY: [u8; 33] =
    hex!("02f9dc5271cc789aab77fb27e8007e681f93135cfcf92d4a514a4649c0e36f14ad");

/// Production derivative networks, all gated on the same timestamp.
const DERIVATIVE_NETWORKS: [&str; 12] = [
    "CCL", "CLC", "GLEEC", "ILN", "KOIN", "PIRATE", "THC", "BCZERO", "RAPH", "MDX",
    // public test chains
    "DOC", "MARTY",
];

/// Activation parameters for one network: the gate past which checkpoint
/// enforcement begins, and the key trusted to sign checkpoint updates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ActivationParams {
    threshold: ActivationThreshold,
    signer_key: SignerKey,
}

impl ActivationParams {
    pub fn new(threshold: ActivationThreshold, signer_key: SignerKey) -> Self {
        Self {
            threshold,
            signer_key,
        }
    }

    pub fn threshold(&self) -> ActivationThreshold {
        self.threshold
    }

    pub fn signer_key(&self) -> &SignerKey {
        &self.signer_key
    }
}

/// Immutable per-network activation table, built once at process start and
/// shared read-only from there on.
///
/// Every slot is optional: an absent entry means the checkpoint feature is
/// simply not configured for that network, which is a valid outcome rather
/// than an error.
#[derive(Clone, Debug, Default)]
pub struct ActivationRegistry {
    primary: Option<ActivationParams>,
    testnet: Option<ActivationParams>,
    derivatives: BTreeMap<String, ActivationParams>,
}

impl ActivationRegistry {
    pub fn new(
        primary: Option<ActivationParams>,
        testnet: Option<ActivationParams>,
        derivatives: BTreeMap<String, ActivationParams>,
    ) -> Self {
        Self {
            primary,
            testnet,
            derivatives,
        }
    }

    /// Builds the built-in production table.
    ///
    /// The primary network is height-gated while every derivative network is
    /// timestamp-gated; the asymmetry is deliberate.  The test variant of
    /// the primary network carries no params, checkpointing is inert there.
    pub fn well_known() -> Self {
        let placeholder = SignerKey::from_bytes(PLACEHOLDER_SIGNER_KEY)
            .expect("params: invalid placeholder signer key");

        let primary = ActivationParams::new(
            ActivationThreshold::Height(PRIMARY_ACTIVATION_HEIGHT),
            placeholder,
        );

        let mut derivatives = BTreeMap::new();
        for symbol in DERIVATIVE_NETWORKS {
            derivatives.insert(
                symbol.to_owned(),
                ActivationParams::new(
                    ActivationThreshold::Timestamp(DERIVATIVE_ACTIVATION_TIMESTAMP),
                    placeholder,
                ),
            );
        }

        // Internal test chain, the only entry with its own key.
        let keeltest_key = SignerKey::from_bytes(KEELTEST_SIGNER_KEY)
            .expect("params: invalid test chain signer key");
        derivatives.insert(
            "KEELTEST".to_owned(),
            ActivationParams::new(
                ActivationThreshold::Timestamp(DERIVATIVE_ACTIVATION_TIMESTAMP),
                keeltest_key,
            ),
        );

        Self {
            primary: Some(primary),
            testnet: None,
            derivatives,
        }
    }

    pub fn primary(&self) -> Option<&ActivationParams> {
        self.primary.as_ref()
    }

    pub fn testnet(&self) -> Option<&ActivationParams> {
        self.testnet.as_ref()
    }

    /// Params for a derivative network, exact case-sensitive match.
    pub fn derivative(&self, symbol: &str) -> Option<&ActivationParams> {
        self.derivatives.get(symbol)
    }

    /// Resolves params for the given network identity.
    ///
    /// Deterministic and side-effect-free.  The testnet slot applies only to
    /// the primary identity with the test-network flag set; derivative
    /// lookups ignore the flag.
    pub fn resolve(
        &self,
        network: &NetworkIdentity,
        use_testnet: bool,
    ) -> Result<&ActivationParams, ParamsError> {
        match network {
            NetworkIdentity::Unset => Err(ParamsError::NetworkNotInitialized),
            NetworkIdentity::Primary => {
                let slot = if use_testnet {
                    &self.testnet
                } else {
                    &self.primary
                };
                slot.as_ref()
                    .ok_or_else(|| ParamsError::NotConfigured(network.to_string()))
            }
            NetworkIdentity::Derivative(symbol) => self
                .derivatives
                .get(symbol)
                .ok_or_else(|| ParamsError::NotConfigured(symbol.clone())),
        }
    }
}
