// Path: crates/types/src/error/mod.rs
//! Core error types for Chainlens.
//!
//! Absence of a record is never an error: collaborators return `Option` for
//! that. The types here cover collaborator failures and calls that cannot be
//! reconciled with their metadata.

use crate::app::{CallIndex, CallPath};
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Failures of the chain registry collaborator itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The lookup could not be completed (e.g. the connection dropped).
    #[error("Registry transport error: {0}")]
    Transport(String),
    /// The registry has no metadata for the call index.
    #[error("Unknown call index {0}")]
    UnknownCall(CallIndex),
}

impl ErrorCode for RegistryError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "REGISTRY_TRANSPORT",
            Self::UnknownCall(_) => "REGISTRY_UNKNOWN_CALL",
        }
    }
}

/// Errors raised while turning a call into a displayable description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    /// A registry lookup failed.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    /// The call carries a different number of arguments than its metadata declares.
    #[error("Call {path} declares {expected} displayable arguments but carries {got}")]
    ArgumentCountMismatch {
        /// The call being described.
        path: CallPath,
        /// The number of non-origin descriptors.
        expected: usize,
        /// The number of arguments on the call.
        got: usize,
    },
    /// An enrichment rule needed an argument the call does not have.
    #[error("Call {path} has no argument at position {position}")]
    MissingArgument {
        /// The call being enriched.
        path: CallPath,
        /// The zero-based position of the missing argument.
        position: usize,
    },
    /// An index argument did not decode as `Compact<u32>`.
    #[error("Malformed index argument: {0}")]
    MalformedIndex(String),
}

impl ErrorCode for IntrospectionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Registry(e) => e.code(),
            Self::ArgumentCountMismatch { .. } => "CALL_ARGUMENT_COUNT_MISMATCH",
            Self::MissingArgument { .. } => "CALL_MISSING_ARGUMENT",
            Self::MalformedIndex(_) => "CALL_MALFORMED_INDEX",
        }
    }
}
