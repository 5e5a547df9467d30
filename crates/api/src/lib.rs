// Path: crates/api/src/lib.rs

//! # Chainlens API Crate Lints
//!
//! This crate enforces a strict set of lints to keep the collaborator
//! contracts panic-free. Panics are disallowed in non-test code.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
//! # Chainlens API
//!
//! The traits the resolvers use to reach the chain registry. Implementations
//! live with whatever owns the chain connection; the services crate only ever
//! sees these contracts.

/// Defines `CallMetadataRegistry` for looking up call metadata by index.
pub mod call;
/// Defines `CollectiveStore` for council motions and membership.
pub mod collective;
/// Re-exports all core error types from the central `chainlens-types` crate.
pub mod error;
/// Defines `IdentityRegistry` for identity and super-account lookups.
pub mod identity;
/// Defines `TextDecoder` and its UTF-8 implementation.
pub mod text;
/// Defines `ProposalStore` for treasury proposal lookups.
pub mod treasury;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::call::CallMetadataRegistry;
    pub use crate::collective::CollectiveStore;
    pub use crate::error::{ErrorCode, IntrospectionError, RegistryError};
    pub use crate::identity::IdentityRegistry;
    pub use crate::text::{TextDecoder, Utf8TextDecoder};
    pub use crate::treasury::ProposalStore;
}
