// Path: crates/services/src/call/enrichment.rs

//! Extra parameters for calls whose own arguments are only a reference to
//! another chain record (e.g. a treasury proposal index).

use async_trait::async_trait;
use chainlens_api::treasury::ProposalStore;
use chainlens_telemetry::call_metrics;
use chainlens_types::app::{CallPath, CallReference, Param, RawValue, TypeDescriptor};
use chainlens_types::codec::decode_compact_index;
use chainlens_types::config::IntrospectionConfig;
use chainlens_types::error::IntrospectionError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A rule that contributes parameters to a call, appended after its own arguments.
#[async_trait]
pub trait ParamEnricher: Send + Sync {
    /// A short, stable name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Produces the extra parameters for `call`. An empty list means the
    /// referenced record does not exist, which is not an error.
    async fn enrich(
        &self,
        path: &CallPath,
        call: &CallReference,
    ) -> Result<Vec<Param>, IntrospectionError>;
}

/// Maps call paths to the rule that enriches them.
#[derive(Clone, Default)]
pub struct EnrichmentTable {
    rules: BTreeMap<CallPath, Arc<dyn ParamEnricher>>,
}

impl EnrichmentTable {
    /// Builds the default rules enabled by `config`.
    pub fn from_config(config: &IntrospectionConfig, proposals: Arc<dyn ProposalStore>) -> Self {
        let mut table = Self::default();
        let treasury = &config.treasury;
        if treasury.enabled {
            let enricher: Arc<dyn ParamEnricher> = Arc::new(TreasuryProposalEnricher::new(proposals));
            for method in &treasury.methods {
                table.register(CallPath::new(treasury.section.clone(), method.clone()), enricher.clone());
            }
        }
        table
    }

    /// Registers `enricher` for `path`, returning the rule it replaced.
    pub fn register(
        &mut self,
        path: CallPath,
        enricher: Arc<dyn ParamEnricher>,
    ) -> Option<Arc<dyn ParamEnricher>> {
        self.rules.insert(path, enricher)
    }

    pub fn with_rule(mut self, path: CallPath, enricher: Arc<dyn ParamEnricher>) -> Self {
        self.register(path, enricher);
        self
    }

    pub fn get(&self, path: &CallPath) -> Option<&Arc<dyn ParamEnricher>> {
        self.rules.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &CallPath> {
        self.rules.keys()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for EnrichmentTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.rules.iter().map(|(path, rule)| (path.to_string(), rule.name())))
            .finish()
    }
}

/// Appends the beneficiary, proposer and payout of the treasury proposal
/// referenced by the call's first argument (a `Compact<ProposalIndex>`).
pub struct TreasuryProposalEnricher {
    proposals: Arc<dyn ProposalStore>,
}

impl TreasuryProposalEnricher {
    pub fn new(proposals: Arc<dyn ProposalStore>) -> Self {
        Self { proposals }
    }
}

#[async_trait]
impl ParamEnricher for TreasuryProposalEnricher {
    fn name(&self) -> &'static str {
        "treasury_proposal"
    }

    async fn enrich(
        &self,
        path: &CallPath,
        call: &CallReference,
    ) -> Result<Vec<Param>, IntrospectionError> {
        let encoded = call
            .args
            .first()
            .ok_or_else(|| IntrospectionError::MissingArgument {
                path: path.clone(),
                position: 0,
            })?;
        let index = decode_compact_index(encoded).map_err(IntrospectionError::MalformedIndex)?;

        let Some(proposal) = self.proposals.proposal(index).await? else {
            log::debug!(
                "[TreasuryProposalEnricher] proposal #{} referenced by {} no longer exists",
                index,
                path
            );
            call_metrics().inc_enrichment(self.name(), "absent");
            return Ok(Vec::new());
        };

        call_metrics().inc_enrichment(self.name(), "applied");
        Ok(vec![
            Param {
                name: "beneficiary".to_string(),
                ty: TypeDescriptor::account_id(),
                value: RawValue::Account(proposal.beneficiary),
            },
            Param {
                name: "proposer".to_string(),
                ty: TypeDescriptor::account_id(),
                value: RawValue::Account(proposal.proposer),
            },
            Param {
                name: "payout".to_string(),
                ty: TypeDescriptor::balance(),
                value: RawValue::Balance(proposal.value),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::CallIntrospector;
    use chainlens_test_utils::fixtures::{arg, call_meta, proposal, Lookup, MockChain};
    use chainlens_types::app::CallIndex;
    use chainlens_types::codec::encode_compact_index;

    const APPROVE: CallIndex = CallIndex([18, 2]);
    const REJECT: CallIndex = CallIndex([18, 1]);
    const PROPOSE: CallIndex = CallIndex([18, 0]);

    fn chain() -> Arc<MockChain> {
        Arc::new(
            MockChain::new()
                .with_call(
                    APPROVE,
                    call_meta(
                        "treasury",
                        "approveProposal",
                        vec![arg("proposal_id", "Compact<ProposalIndex>")],
                        &["Approve a proposal."],
                    ),
                )
                .with_call(
                    REJECT,
                    call_meta(
                        "treasury",
                        "rejectProposal",
                        vec![arg("proposal_id", "Compact<ProposalIndex>")],
                        &["Reject a proposed spend."],
                    ),
                )
                .with_call(
                    PROPOSE,
                    call_meta(
                        "treasury",
                        "proposeSpend",
                        vec![
                            arg("value", "Compact<BalanceOf<T>>"),
                            arg("beneficiary", "LookupSource"),
                        ],
                        &["Put forward a suggestion for spending."],
                    ),
                )
                .with_proposal(7, proposal("prop", "bene", 500, 25)),
        )
    }

    fn introspector(chain: &Arc<MockChain>) -> CallIntrospector {
        let store: Arc<dyn ProposalStore> = chain.clone();
        CallIntrospector::from_config(chain.clone(), Some(store), &IntrospectionConfig::default())
    }

    fn call(index: CallIndex, proposal_id: u32) -> CallReference {
        CallReference {
            call_index: index,
            args: vec![encode_compact_index(proposal_id)],
        }
    }

    #[test]
    fn default_config_registers_both_treasury_methods() {
        let chain = chain();
        let table = EnrichmentTable::from_config(&IntrospectionConfig::default(), chain);
        let paths: Vec<_> = table.paths().map(|p| p.to_string()).collect();
        assert_eq!(
            paths,
            vec!["treasury.approveProposal", "treasury.rejectProposal"]
        );
    }

    #[test]
    fn disabled_config_registers_nothing() {
        let mut config = IntrospectionConfig::default();
        config.treasury.enabled = false;
        assert!(EnrichmentTable::from_config(&config, chain()).is_empty());
    }

    #[tokio::test]
    async fn resolvable_proposal_appends_three_params_after_base() {
        let chain = chain();
        let params = introspector(&chain)
            .extract_params(&call(APPROVE, 7))
            .await
            .unwrap();

        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["proposal_id", "beneficiary", "proposer", "payout"]);
        assert_eq!(params[1].value, RawValue::Account("bene".into()));
        assert_eq!(params[2].value, RawValue::Account("prop".into()));
        assert_eq!(params[3].value, RawValue::Balance(500));
        assert_eq!(params[3].ty.type_name, "Balance");
        assert_eq!(chain.lookups(), vec![Lookup::Proposal(7)]);
    }

    #[tokio::test]
    async fn reject_proposal_is_enriched_too() {
        let chain = chain();
        let params = introspector(&chain)
            .extract_params(&call(REJECT, 7))
            .await
            .unwrap();
        assert_eq!(params.len(), 4);
    }

    #[tokio::test]
    async fn unknown_proposal_returns_base_params_only() {
        let chain = chain();
        let params = introspector(&chain)
            .extract_params(&call(APPROVE, 8))
            .await
            .unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "proposal_id");
        assert_eq!(chain.lookups(), vec![Lookup::Proposal(8)]);
    }

    #[tokio::test]
    async fn other_treasury_methods_make_no_lookup() {
        let chain = chain();
        let proposal_spend = CallReference {
            call_index: PROPOSE,
            args: vec![vec![0x04], vec![0x00; 32]],
        };
        let params = introspector(&chain)
            .extract_params(&proposal_spend)
            .await
            .unwrap();

        assert_eq!(params.len(), 2);
        assert!(chain.lookups().is_empty());
    }

    #[tokio::test]
    async fn malformed_index_is_an_error() {
        let chain = chain();
        let bad = CallReference {
            call_index: APPROVE,
            args: vec![vec![]],
        };
        let err = introspector(&chain).extract_params(&bad).await.unwrap_err();
        assert!(matches!(err, IntrospectionError::MalformedIndex(_)));
        assert!(chain.lookups().is_empty());
    }

    #[tokio::test]
    async fn without_a_proposal_store_nothing_is_enriched() {
        let chain = chain();
        let introspector =
            CallIntrospector::from_config(chain.clone(), None, &IntrospectionConfig::default());
        let params = introspector.extract_params(&call(APPROVE, 7)).await.unwrap();

        assert_eq!(params.len(), 1);
        assert!(chain.lookups().is_empty());
    }

    #[tokio::test]
    async fn custom_rules_can_be_registered() {
        struct Constant;
        #[async_trait]
        impl ParamEnricher for Constant {
            fn name(&self) -> &'static str {
                "constant"
            }
            async fn enrich(
                &self,
                _path: &CallPath,
                _call: &CallReference,
            ) -> Result<Vec<Param>, IntrospectionError> {
                Ok(vec![Param {
                    name: "fee".into(),
                    ty: TypeDescriptor::balance(),
                    value: RawValue::Balance(1),
                }])
            }
        }

        let chain = chain();
        let introspector = CallIntrospector::new(chain.clone()).with_enrichments(
            EnrichmentTable::default()
                .with_rule(CallPath::new("treasury", "proposeSpend"), Arc::new(Constant)),
        );
        let proposal_spend = CallReference {
            call_index: PROPOSE,
            args: vec![vec![0x04], vec![0x00; 32]],
        };
        let params = introspector.extract_params(&proposal_spend).await.unwrap();
        assert_eq!(params.last().map(|p| p.name.as_str()), Some("fee"));
    }
}
