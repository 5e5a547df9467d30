// Path: crates/services/src/lib.rs
#![forbid(unsafe_code)]
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

//! # Chainlens Services
//!
//! The resolvers built on top of the `chainlens-api` collaborator traits:
//! account identities, call descriptions, council motions and the treasury.

pub mod call;
pub mod docs;
pub mod identity;
mod metrics;
pub mod motions;
pub mod text;
pub mod treasury;

pub use call::enrichment::{EnrichmentTable, ParamEnricher, TreasuryProposalEnricher};
pub use call::CallIntrospector;
pub use docs::format_documentation;
pub use identity::IdentityResolver;
pub use motions::{MotionInspector, MotionSummary};
pub use treasury::{TreasuryEntry, TreasuryInspector, TreasuryOverview};
