// Path: crates/services/src/treasury/mod.rs

//! An overview of the treasury: pending and approved spending proposals, with
//! their proposers and beneficiaries resolved to identities.

use crate::identity::IdentityResolver;
use crate::metrics;
use chainlens_api::treasury::ProposalStore;
use chainlens_types::app::{IdentityResult, ProposalIndex, ProposalRecord};
use chainlens_types::error::RegistryError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A proposal with its proposer and beneficiary resolved to identities.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TreasuryEntry {
    pub index: ProposalIndex,
    pub proposal: ProposalRecord,
    pub proposer: IdentityResult,
    pub beneficiary: IdentityResult,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TreasuryOverview {
    /// Proposals awaiting a council decision, by index.
    pub proposals: Vec<TreasuryEntry>,
    /// Approved proposals awaiting payout, in approval order.
    pub approved: Vec<TreasuryEntry>,
}

/// Builds a `TreasuryOverview` from a proposal store and an identity resolver.
#[derive(Clone)]
pub struct TreasuryInspector {
    store: Arc<dyn ProposalStore>,
    resolver: IdentityResolver,
}

impl TreasuryInspector {
    pub fn new(store: Arc<dyn ProposalStore>, resolver: IdentityResolver) -> Self {
        Self { store, resolver }
    }

    /// Loads every stored proposal and splits it into pending and approved.
    ///
    /// Approval indices whose proposal has already been paid out are skipped.
    pub async fn load(&self) -> Result<TreasuryOverview, RegistryError> {
        let approvals = self.store.approvals().await.map_err(record_store_error)?;
        let mut stored: BTreeMap<ProposalIndex, ProposalRecord> = self
            .store
            .proposals()
            .await
            .map_err(record_store_error)?
            .into_iter()
            .collect();

        let mut overview = TreasuryOverview::default();

        for index in approvals {
            match stored.remove(&index) {
                Some(record) => overview.approved.push(self.entry(index, record).await?),
                None => log::debug!(
                    "[TreasuryInspector] approval #{} has no stored proposal, skipping",
                    index
                ),
            }
        }
        // Whatever is left was never approved.
        for (index, record) in stored {
            overview.proposals.push(self.entry(index, record).await?);
        }

        Ok(overview)
    }

    async fn entry(
        &self,
        index: ProposalIndex,
        proposal: ProposalRecord,
    ) -> Result<TreasuryEntry, RegistryError> {
        let proposer = self.resolver.resolve_identity(&proposal.proposer).await?;
        let beneficiary = self.resolver.resolve_identity(&proposal.beneficiary).await?;
        Ok(TreasuryEntry {
            index,
            proposal,
            proposer,
            beneficiary,
        })
    }
}

impl std::fmt::Debug for TreasuryInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreasuryInspector").finish_non_exhaustive()
    }
}

fn record_store_error(e: RegistryError) -> RegistryError {
    metrics::record_error("TreasuryInspector", "registry", e)
}
