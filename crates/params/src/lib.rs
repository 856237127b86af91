//! Per-network activation parameters for the synchronized checkpoint
//! feature.
//!
//! Each network of the family is configured independently: the primary
//! network, its test variant, and any number of derivative networks keyed by
//! symbol.  The registry is an immutable value built once at process start;
//! the resolver evaluates, without locks or I/O, whether checkpoint
//! enforcement is active for the network the process runs.

mod activation;
mod errors;
mod network;
mod registry;
mod resolver;

pub use activation::{ActivationThreshold, LOCKTIME_THRESHOLD};
pub use errors::ParamsError;
pub use network::NetworkIdentity;
pub use registry::{ActivationParams, ActivationRegistry};
pub use resolver::ActivationResolver;
