// Path: crates/api/src/collective/mod.rs

//! Defines the `CollectiveStore` trait for council motions.

use async_trait::async_trait;
use chainlens_types::app::{Address, CollectiveProposal};
use chainlens_types::error::RegistryError;

/// A read-only view of a collective (e.g. the council).
#[async_trait]
pub trait CollectiveStore: Send + Sync {
    /// Fetches all open motions together with their tallies.
    async fn proposals(&self) -> Result<Vec<CollectiveProposal>, RegistryError>;

    /// Fetches the current members of the collective.
    async fn members(&self) -> Result<Vec<Address>, RegistryError>;
}
