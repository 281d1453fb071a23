//! # lexia-gateway
//!
//! Gateway to the external term-generation provider. A single
//! minimum-interval throttle serializes every outbound call, because the
//! provider quota is global to the account; prompt construction and response
//! parsing live here so callers only ever see clean, normalized terms.
//!
//! All provider failures are normalized to "no result" at the
//! [`lexia_core::traits::TermGateway`] surface. Retry policy belongs to the
//! caller; the next scheduled cycle is the retry.

pub mod gateway;
pub mod prompts;
pub mod rest;
pub mod throttle;

pub use gateway::Gateway;
pub use rest::RestProvider;
pub use throttle::CallThrottle;
