// Path: crates/api/src/call/mod.rs

//! Defines the `CallMetadataRegistry` trait.

use chainlens_types::app::{CallIndex, CallMetadata};
use chainlens_types::error::RegistryError;

/// The type registry's view of call metadata.
///
/// Metadata is held locally by the registry once the chain's runtime metadata
/// has been loaded, so this lookup is synchronous.
pub trait CallMetadataRegistry: Send + Sync {
    /// Resolves a call index to its section, method, arguments and documentation.
    ///
    /// Returns `RegistryError::UnknownCall` if the index is not in the metadata.
    fn find_meta_call(&self, index: CallIndex) -> Result<CallMetadata, RegistryError>;
}
