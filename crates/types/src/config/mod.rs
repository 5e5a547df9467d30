// Path: crates/types/src/config/mod.rs

//! Configuration structures for the call introspector.
use serde::{Deserialize, Serialize};

/// Top-level configuration of the call introspector.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct IntrospectionConfig {
    /// Settings for the treasury proposal enrichment rule.
    #[serde(default)]
    pub treasury: TreasuryEnrichmentConfig,
}

/// Which calls get the treasury proposal's beneficiary, proposer and payout
/// appended to their parameters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TreasuryEnrichmentConfig {
    /// Whether the rule is registered at all.
    #[serde(default = "default_treasury_enabled")]
    pub enabled: bool,
    /// The pallet the proposals live in.
    #[serde(default = "default_treasury_section")]
    pub section: String,
    /// Calls whose first argument is a `Compact<ProposalIndex>`.
    #[serde(default = "default_treasury_methods")]
    pub methods: Vec<String>,
}

fn default_treasury_enabled() -> bool {
    true
}
fn default_treasury_section() -> String {
    "treasury".to_string()
}
fn default_treasury_methods() -> Vec<String> {
    vec!["approveProposal".to_string(), "rejectProposal".to_string()]
}

impl Default for TreasuryEnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: default_treasury_enabled(),
            section: default_treasury_section(),
            methods: default_treasury_methods(),
        }
    }
}
