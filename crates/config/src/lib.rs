//! Process configuration.

use keel_params::NetworkIdentity;
use serde::{Deserialize, Serialize};

/// Network selection portion of the node configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Symbol of the derivative network to run.  Unset runs the primary
    /// network.
    #[serde(default)]
    pub network: Option<String>,

    /// Run against the test variant of the primary network.  Defaults to
    /// false.
    #[serde(default)]
    pub testnet: bool,
}

impl NetworkConfig {
    /// Loads the config from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// The network identity this configuration selects.
    pub fn identity(&self) -> NetworkIdentity {
        match &self.network {
            Some(symbol) => NetworkIdentity::derivative(symbol.clone()),
            None => NetworkIdentity::Primary,
        }
    }
}
