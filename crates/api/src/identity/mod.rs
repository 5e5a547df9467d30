// Path: crates/api/src/identity/mod.rs

//! Defines the `IdentityRegistry` trait for decoupled identity lookups.

use async_trait::async_trait;
use chainlens_types::app::{Address, IdentityRegistration, SuperLink};
use chainlens_types::error::RegistryError;

/// A read-only view of the identity pallet's two tables.
///
/// Both lookups are round trips to the chain. `Ok(None)` means the record does
/// not exist; `Err` is reserved for the lookup itself failing.
#[async_trait]
pub trait IdentityRegistry: Send + Sync {
    /// Fetches the registration stored directly against `address`.
    async fn identity_of(
        &self,
        address: &Address,
    ) -> Result<Option<IdentityRegistration>, RegistryError>;

    /// Fetches the super-account link of `address`, if it is a sub-account.
    async fn super_of(&self, address: &Address) -> Result<Option<SuperLink>, RegistryError>;
}
