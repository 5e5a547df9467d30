// Path: crates/services/src/call/mod.rs

//! Decodes opaque calls into displayable descriptors.

pub mod enrichment;

use crate::docs::format_documentation;
use chainlens_api::call::CallMetadataRegistry;
use chainlens_api::treasury::ProposalStore;
use crate::metrics;
use chainlens_telemetry::call_metrics;
use chainlens_types::app::{
    CallDescriptor, CallMetadata, CallReference, Param, RawValue, TypeDescriptor,
};
use chainlens_types::config::IntrospectionConfig;
use chainlens_types::error::IntrospectionError;
use enrichment::EnrichmentTable;
use std::sync::Arc;

/// Turns a `CallReference` into its path, parameters and documentation.
///
/// Base parameters come from the call's own arguments. Calls whose path has a
/// rule in the `EnrichmentTable` get extra parameters appended after them.
#[derive(Clone)]
pub struct CallIntrospector {
    metadata: Arc<dyn CallMetadataRegistry>,
    enrichments: EnrichmentTable,
}

impl CallIntrospector {
    /// Creates an introspector with no enrichment rules.
    pub fn new(metadata: Arc<dyn CallMetadataRegistry>) -> Self {
        Self {
            metadata,
            enrichments: EnrichmentTable::default(),
        }
    }

    /// Creates an introspector with the rules enabled in `config`.
    ///
    /// Without a proposal store there is nothing to enrich from, so no rules are registered.
    pub fn from_config(
        metadata: Arc<dyn CallMetadataRegistry>,
        proposals: Option<Arc<dyn ProposalStore>>,
        config: &IntrospectionConfig,
    ) -> Self {
        let enrichments = proposals
            .map(|store| EnrichmentTable::from_config(config, store))
            .unwrap_or_default();
        Self::new(metadata).with_enrichments(enrichments)
    }

    pub fn with_enrichments(mut self, enrichments: EnrichmentTable) -> Self {
        self.enrichments = enrichments;
        self
    }

    pub fn enrichments(&self) -> &EnrichmentTable {
        &self.enrichments
    }

    /// Describes a call using its own arguments only. Makes no round trips.
    pub fn describe_call(&self, call: &CallReference) -> Result<CallDescriptor, IntrospectionError> {
        self.describe(call).map_err(record_error)
    }

    /// Describes a call, including any parameters contributed by an enrichment rule.
    pub async fn describe_call_enriched(
        &self,
        call: &CallReference,
    ) -> Result<CallDescriptor, IntrospectionError> {
        let mut descriptor = self.describe_call(call)?;
        let path = descriptor.path();
        if let Some(enricher) = self.enrichments.get(&path) {
            log::debug!(
                "[CallIntrospector] applying {} enrichment to {}",
                enricher.name(),
                path
            );
            let extra = enricher.enrich(&path, call).await.map_err(record_error)?;
            descriptor.params.extend(extra);
        }
        Ok(descriptor)
    }

    /// The call's displayable parameters: base arguments first, then any enrichment.
    pub async fn extract_params(&self, call: &CallReference) -> Result<Vec<Param>, IntrospectionError> {
        Ok(self.describe_call_enriched(call).await?.params)
    }

    /// The call's documentation as a single display line.
    pub fn documentation(&self, call: &CallReference) -> Result<String, IntrospectionError> {
        let meta = self
            .metadata
            .find_meta_call(call.call_index)
            .map_err(|e| record_error(e.into()))?;
        Ok(format_documentation(&meta.documentation))
    }

    fn describe(&self, call: &CallReference) -> Result<CallDescriptor, IntrospectionError> {
        let meta = self.metadata.find_meta_call(call.call_index)?;
        let params = base_params(&meta, call)?;
        call_metrics().inc_call_described(&meta.section);
        Ok(CallDescriptor {
            section: meta.section,
            method: meta.method,
            documentation_lines: meta.documentation,
            params,
        })
    }
}

impl std::fmt::Debug for CallIntrospector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallIntrospector")
            .field("enrichments", &self.enrichments)
            .finish_non_exhaustive()
    }
}

/// Pairs the non-origin descriptors of `meta` with the call's arguments, in order.
pub fn base_params(
    meta: &CallMetadata,
    call: &CallReference,
) -> Result<Vec<Param>, IntrospectionError> {
    let descriptors: Vec<_> = meta.display_args().collect();
    if descriptors.len() != call.args.len() {
        return Err(IntrospectionError::ArgumentCountMismatch {
            path: meta.path(),
            expected: descriptors.len(),
            got: call.args.len(),
        });
    }

    Ok(descriptors
        .into_iter()
        .zip(&call.args)
        .map(|(descriptor, value)| Param {
            name: descriptor.name.clone(),
            ty: TypeDescriptor::from_type_name(&descriptor.type_name),
            value: RawValue::Encoded(value.clone()),
        })
        .collect())
}

fn record_error(e: IntrospectionError) -> IntrospectionError {
    metrics::record_error("CallIntrospector", "introspection", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainlens_test_utils::fixtures::{arg, call_meta, origin_arg, MockChain};
    use chainlens_types::app::{CallIndex, TypeInfo};
    use chainlens_types::error::RegistryError;

    const VOTE: CallIndex = CallIndex([14, 1]);

    fn chain() -> Arc<MockChain> {
        Arc::new(MockChain::new().with_call(
            VOTE,
            call_meta(
                "council",
                "vote",
                vec![
                    origin_arg(),
                    arg("proposal", "Hash"),
                    arg("index", "Compact<ProposalIndex>"),
                    arg("approve", "bool"),
                ],
                &["Add an aye or nay vote.", "", "# <weight>", "</weight>"],
            ),
        ))
    }

    fn vote_call() -> CallReference {
        CallReference {
            call_index: VOTE,
            args: vec![vec![0xaa; 32], vec![0x08], vec![0x01]],
        }
    }

    #[test]
    fn describe_call_zips_non_origin_args_in_order() {
        let introspector = CallIntrospector::new(chain());
        let descriptor = introspector.describe_call(&vote_call()).unwrap();

        assert_eq!(descriptor.path().to_string(), "council.vote");
        let names: Vec<_> = descriptor.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["proposal", "index", "approve"]);
        assert_eq!(descriptor.params[1].value, RawValue::Encoded(vec![0x08]));
        assert!(matches!(
            descriptor.params[1].ty.info,
            TypeInfo::Compact(_)
        ));
    }

    #[test]
    fn documentation_is_normalized() {
        let introspector = CallIntrospector::new(chain());
        assert_eq!(
            introspector.documentation(&vote_call()).unwrap(),
            "Add an aye or nay vote."
        );
    }

    #[test]
    fn argument_count_mismatch_is_an_error() {
        let introspector = CallIntrospector::new(chain());
        let mut call = vote_call();
        call.args.pop();

        let err = introspector.describe_call(&call).unwrap_err();
        assert!(matches!(
            err,
            IntrospectionError::ArgumentCountMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn unknown_call_index_propagates() {
        let introspector = CallIntrospector::new(chain());
        let call = CallReference {
            call_index: CallIndex([99, 0]),
            args: vec![],
        };
        let err = introspector.describe_call(&call).unwrap_err();
        assert_eq!(
            err,
            IntrospectionError::Registry(RegistryError::UnknownCall(CallIndex([99, 0])))
        );
    }

    #[tokio::test]
    async fn extract_params_without_rules_equals_base_params() {
        let introspector = CallIntrospector::new(chain());
        let params = introspector.extract_params(&vote_call()).await.unwrap();
        let base = introspector.describe_call(&vote_call()).unwrap().params;
        assert_eq!(params, base);
    }
}
