// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
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

//! # Chainlens Types
//!
//! The foundational library for Chainlens, containing the decoded chain records
//! the resolvers consume, the values they produce, and the shared error and
//! configuration types.
//!
//! ## Architectural Role
//!
//! As the base crate, `chainlens-types` has minimal dependencies and is a
//! dependency of every other crate in the workspace. Records such as
//! `IdentityRegistration`, `CallReference` and `ProposalRecord` are defined
//! here once so that the collaborator traits in `chainlens-api` and the
//! services that consume them agree on a single shape.

/// Chain records and derived display values (identities, calls, proposals).
pub mod app;
/// The canonical SCALE codec helpers, including compact index decoding.
pub mod codec;
/// Configuration structures for the call introspector.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
