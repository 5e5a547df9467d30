// Path: crates/services/tests/resolution_e2e.rs

use anyhow::Result;
use chainlens_services::{format_documentation, CallIntrospector, IdentityResolver};
use chainlens_test_utils::fixtures::{arg, call_meta, origin_arg, proposal, registration, Lookup, MockChain};
use chainlens_test_utils::{assert_err, assert_resolved, assert_unresolved};
use chainlens_api::treasury::ProposalStore;
use chainlens_types::app::{Address, CallIndex, CallReference, IdentityResult, RawValue};
use chainlens_types::codec::encode_compact_index;
use chainlens_types::config::IntrospectionConfig;
use chainlens_types::error::{ErrorCode, IntrospectionError, RegistryError};
use futures::future::join_all;
use std::sync::Arc;

const APPROVE: CallIndex = CallIndex([18, 2]);
const REJECT: CallIndex = CallIndex([18, 1]);
const TRANSFER: CallIndex = CallIndex([5, 0]);

/// A small chain with a registered council member, a sub-account of a
/// registered organisation, and a couple of treasury proposals.
fn chain() -> Arc<MockChain> {
    Arc::new(
        MockChain::new()
            .with_identity("alice", registration("Alice", 1))
            .with_identity("nameless", registration("", 2))
            .with_identity("org", registration("Web3 Org", 1))
            .with_super("org/ops", "org", "ops")
            .with_super("orphan", "gone", "x")
            .with_call(
                TRANSFER,
                call_meta(
                    "balances",
                    "transfer",
                    vec![
                        origin_arg(),
                        arg("dest", "LookupSource"),
                        arg("value", "Compact<Balance>"),
                    ],
                    &[
                        " Transfer some liquid free balance to another account.",
                        "",
                        " `transfer` will set the `FreeBalance` of the sender and receiver.",
                    ],
                ),
            )
            .with_call(
                APPROVE,
                call_meta(
                    "treasury",
                    "approveProposal",
                    vec![arg("proposal_id", "Compact<ProposalIndex>")],
                    &[" Approve a proposal. # <weight>", " - O(1).", " # </weight>"],
                ),
            )
            .with_call(
                REJECT,
                call_meta(
                    "treasury",
                    "rejectProposal",
                    vec![arg("proposal_id", "Compact<ProposalIndex>")],
                    &[" Reject a proposed spend. The original deposit will be slashed."],
                ),
            )
            .with_proposal(0, proposal("alice", "org/ops", 1_000, 50))
            .with_proposal(4, proposal("org", "alice", 250, 12)),
    )
}

fn introspector(chain: &Arc<MockChain>, config: &IntrospectionConfig) -> CallIntrospector {
    let store: Arc<dyn ProposalStore> = chain.clone();
    CallIntrospector::from_config(chain.clone(), Some(store), config)
}

fn treasury_call(index: CallIndex, proposal_id: u32) -> CallReference {
    CallReference {
        call_index: index,
        args: vec![encode_compact_index(proposal_id)],
    }
}

#[tokio::test]
async fn identity_outcomes_match_registry_state() -> Result<()> {
    let chain = chain();
    let resolver = IdentityResolver::new(chain.clone());

    assert_resolved!(resolver.resolve_identity(&"alice".into()).await?, "alice", "Alice");
    assert_resolved!(
        resolver.resolve_identity(&"nameless".into()).await?,
        "nameless",
        "nameless"
    );

    let sub = resolver.resolve_identity(&"org/ops".into()).await?;
    assert_resolved!(sub, "org", "Web3 Org");
    assert!(sub.has_judgements());

    for address in ["orphan", "stranger"] {
        let result = resolver.resolve_identity(&address.into()).await?;
        assert_unresolved!(result, address);
        assert!(!result.has_judgements());
        assert!(result.judgements().is_none());
    }
    Ok(())
}

#[tokio::test]
async fn concurrent_resolutions_are_independent() -> Result<()> {
    let chain = chain();
    let resolver = IdentityResolver::new(chain.clone());
    let addresses: Vec<Address> = ["alice", "org/ops", "stranger", "alice"]
        .into_iter()
        .map(Address::from)
        .collect();

    let mut sequential = Vec::new();
    for address in &addresses {
        sequential.push(resolver.resolve_identity(address).await?);
    }
    let concurrent = join_all(addresses.iter().map(|a| resolver.resolve_identity(a)))
        .await
        .into_iter()
        .collect::<Result<Vec<_>, RegistryError>>()?;

    assert_eq!(sequential, concurrent);
    Ok(())
}

#[tokio::test]
async fn identity_result_serializes_with_status_tag() -> Result<()> {
    let chain = chain();
    let resolver = IdentityResolver::new(chain.clone());

    let unresolved = resolver.resolve_identity(&"stranger".into()).await?;
    assert_eq!(
        serde_json::to_value(&unresolved)?,
        serde_json::json!({ "status": "unresolved", "address": "stranger" })
    );

    let resolved = resolver.resolve_identity(&"alice".into()).await?;
    let json = serde_json::to_value(&resolved)?;
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["display"], "Alice");
    assert_eq!(json["has_judgements"], true);

    let back: IdentityResult = serde_json::from_value(json)?;
    assert_eq!(back, resolved);
    Ok(())
}

#[tokio::test]
async fn non_treasury_call_has_base_params_and_no_round_trips() -> Result<()> {
    let chain = chain();
    let introspector = introspector(&chain, &IntrospectionConfig::default());
    let call = CallReference {
        call_index: TRANSFER,
        args: vec![vec![0x01; 32], vec![0x0c]],
    };

    let params = introspector.extract_params(&call).await?;
    let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["dest", "value"]);
    assert_eq!(params[1].value, RawValue::Encoded(vec![0x0c]));
    assert_eq!(
        introspector.documentation(&call)?,
        "Transfer some liquid free balance to another account."
    );
    assert!(chain.lookups().is_empty());
    Ok(())
}

#[tokio::test]
async fn proposal_index_zero_is_enriched() -> Result<()> {
    let chain = chain();
    let introspector = introspector(&chain, &IntrospectionConfig::default());

    let descriptor = introspector
        .describe_call_enriched(&treasury_call(APPROVE, 0))
        .await?;
    assert_eq!(descriptor.path().to_string(), "treasury.approveProposal");
    assert_eq!(
        format_documentation(&descriptor.documentation_lines),
        "Approve a proposal. "
    );

    let names: Vec<_> = descriptor.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["proposal_id", "beneficiary", "proposer", "payout"]);
    assert_eq!(descriptor.params[1].value, RawValue::Account("org/ops".into()));
    assert_eq!(descriptor.params[2].value, RawValue::Account("alice".into()));
    assert_eq!(descriptor.params[3].value, RawValue::Balance(1_000));
    assert_eq!(chain.lookups(), vec![Lookup::Proposal(0)]);
    Ok(())
}

#[tokio::test]
async fn configured_methods_limit_enrichment() -> Result<()> {
    let config: IntrospectionConfig = toml::from_str(
        r#"
        [treasury]
        methods = ["approveProposal"]
        "#,
    )?;
    let chain = chain();
    let introspector = introspector(&chain, &config);

    assert_eq!(introspector.enrichments().len(), 1);
    assert_eq!(
        introspector.extract_params(&treasury_call(REJECT, 4)).await?.len(),
        1
    );
    assert_eq!(
        introspector.extract_params(&treasury_call(APPROVE, 4)).await?.len(),
        4
    );
    assert_eq!(chain.lookups(), vec![Lookup::Proposal(4)]);
    Ok(())
}

#[tokio::test]
async fn describe_call_is_idempotent() -> Result<()> {
    let chain = chain();
    let introspector = introspector(&chain, &IntrospectionConfig::default());
    let call = treasury_call(APPROVE, 4);

    assert_eq!(introspector.describe_call(&call)?, introspector.describe_call(&call)?);
    assert_eq!(
        introspector.describe_call_enriched(&call).await?,
        introspector.describe_call_enriched(&call).await?
    );
    Ok(())
}

#[tokio::test]
async fn introspection_errors_carry_stable_codes() {
    let chain = chain();
    let introspector = introspector(&chain, &IntrospectionConfig::default());

    let unknown = CallReference {
        call_index: CallIndex([99, 9]),
        args: vec![],
    };
    let err = assert_err!(introspector.extract_params(&unknown).await);
    assert_eq!(err.code(), "REGISTRY_UNKNOWN_CALL");

    let trailing = CallReference {
        call_index: APPROVE,
        args: vec![vec![0x00, 0xff]],
    };
    let err = assert_err!(introspector.extract_params(&trailing).await);
    assert!(matches!(err, IntrospectionError::MalformedIndex(_)));
    assert!(chain.lookups().is_empty());
}
