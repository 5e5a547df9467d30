// Path: crates/api/src/treasury/mod.rs

//! Defines the `ProposalStore` trait for treasury lookups.

use async_trait::async_trait;
use chainlens_types::app::{ProposalIndex, ProposalRecord};
use chainlens_types::error::RegistryError;

/// A read-only view of the treasury pallet.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Fetches a single proposal. `Ok(None)` for unknown or already paid-out indices.
    async fn proposal(&self, index: ProposalIndex)
        -> Result<Option<ProposalRecord>, RegistryError>;

    /// Fetches every proposal currently stored, pending or approved, ordered by index.
    async fn proposals(&self) -> Result<Vec<(ProposalIndex, ProposalRecord)>, RegistryError>;

    /// Fetches the indices of approved proposals awaiting payout.
    async fn approvals(&self) -> Result<Vec<ProposalIndex>, RegistryError>;
}
