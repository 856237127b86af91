//! Params resolution errors.

use thiserror::Error;

/// Failures while resolving activation params for a network.
///
/// Both variants are lookup-style outcomes: callers recover them locally as
/// "try again later" or "feature off", never as fatal conditions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamsError {
    /// The process network identity has not been established yet.
    #[error("network identity not initialized yet")]
    NetworkNotInitialized,

    /// No activation params are configured for the resolved network.
    #[error("no activation params configured for network {0}")]
    NotConfigured(String),
}
