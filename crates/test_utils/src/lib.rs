// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Chainlens Test Utilities
//!
//! An in-memory chain implementing every collaborator trait, record builders,
//! and assertion macros for identity results.

// Re-exported so the assertion macros can name types through `$crate`.
pub use chainlens_types;

pub mod assertions;
pub mod fixtures;
