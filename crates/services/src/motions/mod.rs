// Path: crates/services/src/motions/mod.rs

//! Summaries of open council motions: what the motion would call, and how the vote stands.

use crate::call::CallIntrospector;
use crate::docs::format_documentation;
use crate::metrics;
use chainlens_api::collective::CollectiveStore;
use chainlens_types::app::{CollectiveProposal, Param};
use chainlens_types::error::{IntrospectionError, RegistryError};
use serde::Serialize;
use std::sync::Arc;

/// A motion ready for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MotionSummary {
    /// The hex-encoded hash of the proposed call.
    pub hash: String,
    /// The motion index, if the tally is still open.
    pub index: Option<u32>,
    /// `section.method` of the proposed call.
    pub title: String,
    /// The proposed call's documentation, normalized.
    pub documentation: String,
    /// The proposed call's parameters, including enrichment.
    pub params: Vec<Param>,
    /// Number of aye votes.
    pub ayes: usize,
    /// Number of nay votes.
    pub nays: usize,
    /// Ayes required to pass.
    pub threshold: Option<u32>,
    /// Current size of the collective.
    pub members_count: usize,
}

impl MotionSummary {
    pub fn aye_label(&self) -> String {
        format!("Aye {}/{}", self.ayes, self.members_count)
    }

    pub fn nay_label(&self) -> String {
        format!("Nay {}/{}", self.nays, self.members_count)
    }
}

/// Builds `MotionSummary`s from a collective and a call introspector.
#[derive(Clone)]
pub struct MotionInspector {
    collective: Arc<dyn CollectiveStore>,
    introspector: Arc<CallIntrospector>,
}

impl MotionInspector {
    pub fn new(collective: Arc<dyn CollectiveStore>, introspector: Arc<CallIntrospector>) -> Self {
        Self {
            collective,
            introspector,
        }
    }

    /// Summarizes one motion against a collective of `members_count` members.
    pub async fn summarize(
        &self,
        motion: &CollectiveProposal,
        members_count: usize,
    ) -> Result<MotionSummary, IntrospectionError> {
        let descriptor = self
            .introspector
            .describe_call_enriched(&motion.proposal)
            .await?;

        Ok(MotionSummary {
            hash: format!("0x{}", hex::encode(motion.hash)),
            index: motion.votes.as_ref().map(|v| v.index),
            title: descriptor.path().to_string(),
            documentation: format_documentation(&descriptor.documentation_lines),
            params: descriptor.params,
            ayes: motion.votes.as_ref().map_or(0, |v| v.ayes.len()),
            nays: motion.votes.as_ref().map_or(0, |v| v.nays.len()),
            threshold: motion.votes.as_ref().map(|v| v.threshold),
            members_count,
        })
    }

    /// Summarizes every open motion, in the order the collective returns them.
    pub async fn list_motions(&self) -> Result<Vec<MotionSummary>, IntrospectionError> {
        let members_count = self
            .collective
            .members()
            .await
            .map_err(record_store_error)?
            .len();
        let motions = self
            .collective
            .proposals()
            .await
            .map_err(record_store_error)?;
        log::debug!(
            "[MotionInspector] summarizing {} motions for {} members",
            motions.len(),
            members_count
        );

        let mut summaries = Vec::with_capacity(motions.len());
        for motion in &motions {
            summaries.push(self.summarize(motion, members_count).await?);
        }
        Ok(summaries)
    }
}

fn record_store_error(e: RegistryError) -> RegistryError {
    metrics::record_error("MotionInspector", "registry", e)
}
