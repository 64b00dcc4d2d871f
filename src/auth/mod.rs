//! Authentication module
//!
//! Supports: API Key, Basic, Bearer, Custom Headers
//!
//! The `Authenticator` applies static credentials to every outgoing
//! control-plane request.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location};

#[cfg(test)]
mod tests;
