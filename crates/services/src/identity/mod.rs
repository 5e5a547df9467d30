// Path: crates/services/src/identity/mod.rs

//! Resolves an address to a display identity, falling back to the identity of
//! its super-account.

use chainlens_api::identity::IdentityRegistry;
use chainlens_api::text::{TextDecoder, Utf8TextDecoder};
use chainlens_telemetry::time::Timer;
use chainlens_telemetry::{error_metrics, identity_metrics};
use chainlens_types::app::{Address, IdentityRegistration, IdentityResult};
use chainlens_types::error::{ErrorCode, RegistryError};
use std::sync::Arc;

const OUTCOME_DIRECT: &str = "direct";
const OUTCOME_SUPER: &str = "super";
const OUTCOME_UNRESOLVED: &str = "unresolved";

/// Looks up identities through an `IdentityRegistry`.
///
/// Every call is independent: nothing is cached, and at most three sequential
/// round trips are made (direct registration, super link, parent registration).
#[derive(Clone)]
pub struct IdentityResolver {
    registry: Arc<dyn IdentityRegistry>,
    decoder: Arc<dyn TextDecoder>,
}

impl IdentityResolver {
    pub fn new(registry: Arc<dyn IdentityRegistry>) -> Self {
        Self {
            registry,
            decoder: Arc::new(Utf8TextDecoder),
        }
    }

    /// Replaces the UTF-8 decoder used for display bytes.
    pub fn with_decoder(mut self, decoder: Arc<dyn TextDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Resolves the identity of `address`.
    ///
    /// A missing record is not an error: it yields `IdentityResult::Unresolved`.
    /// Registry failures are returned unchanged.
    pub async fn resolve_identity(&self, address: &Address) -> Result<IdentityResult, RegistryError> {
        let _timer = Timer::new(identity_metrics());
        match self.resolve(address).await {
            Ok((outcome, result)) => {
                identity_metrics().inc_resolution(outcome);
                Ok(result)
            }
            Err(e) => {
                log::warn!("[IdentityResolver] lookup for {} failed: {}", address, e);
                error_metrics().inc_error("registry", e.code());
                Err(e)
            }
        }
    }

    async fn resolve(
        &self,
        address: &Address,
    ) -> Result<(&'static str, IdentityResult), RegistryError> {
        identity_metrics().inc_identity_lookup("identity_of");
        if let Some(registration) = self.registry.identity_of(address).await? {
            let display = self.display(&registration, address);
            return Ok((
                OUTCOME_DIRECT,
                IdentityResult::Resolved {
                    address: address.clone(),
                    display,
                    has_judgements: registration.has_judgements(),
                    registration,
                },
            ));
        }

        log::debug!(
            "[IdentityResolver] {} has no registration, checking for a super-account",
            address
        );
        identity_metrics().inc_identity_lookup("super_of");
        let Some(link) = self.registry.super_of(address).await? else {
            return Ok((OUTCOME_UNRESOLVED, Self::unresolved(address)));
        };

        identity_metrics().inc_identity_lookup("identity_of");
        let Some(registration) = self.registry.identity_of(&link.parent).await? else {
            log::debug!(
                "[IdentityResolver] super-account {} of {} has no registration",
                link.parent,
                address
            );
            return Ok((OUTCOME_UNRESOLVED, Self::unresolved(address)));
        };

        // The display falls back to the queried address, not the parent's.
        let display = self.display(&registration, address);
        Ok((
            OUTCOME_SUPER,
            IdentityResult::Resolved {
                address: link.parent,
                display,
                has_judgements: registration.has_judgements(),
                registration,
            },
        ))
    }

    fn display(&self, registration: &IdentityRegistration, fallback: &Address) -> String {
        let text = self.decoder.decode_text(registration.display_bytes());
        if text.is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }

    fn unresolved(address: &Address) -> IdentityResult {
        IdentityResult::Unresolved {
            address: address.clone(),
        }
    }
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityResolver").finish_non_exhaustive()
    }
}
