//! An in-memory chain and record builders for reproducible tests

use async_trait::async_trait;
use chainlens_api::prelude::{
    CallMetadataRegistry, CollectiveStore, IdentityRegistry, ProposalStore, RegistryError,
};
use chainlens_types::app::{
    Address, ArgumentDescriptor, CallIndex, CallMetadata, CallReference, CollectiveProposal,
    IdentityData, IdentityInfo, IdentityRegistration, Judgement, MotionVotes, ProposalIndex,
    ProposalRecord, SuperLink,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

/// A storage table of the mock chain, used to inject failures
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Table {
    IdentityOf,
    SuperOf,
    Proposal,
    Proposals,
    Approvals,
    Motions,
    Members,
}

/// A round trip recorded by the mock chain, in call order
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Lookup {
    IdentityOf(Address),
    SuperOf(Address),
    Proposal(ProposalIndex),
    Proposals,
    Approvals,
    Motions,
    Members,
}

/// An in-memory chain implementing every collaborator trait.
///
/// Built once with the `with_*` methods, then shared behind an `Arc`. Every
/// async lookup is recorded; metadata lookups are local and are not.
#[derive(Default)]
pub struct MockChain {
    identities: HashMap<Address, IdentityRegistration>,
    supers: HashMap<Address, SuperLink>,
    calls: HashMap<CallIndex, CallMetadata>,
    proposals: BTreeMap<ProposalIndex, ProposalRecord>,
    approvals: Vec<ProposalIndex>,
    motions: Vec<CollectiveProposal>,
    members: Vec<Address>,
    failing: HashSet<Table>,
    lookups: Mutex<Vec<Lookup>>,
}

impl MockChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `registration` directly against `address`
    pub fn with_identity(mut self, address: &str, registration: IdentityRegistration) -> Self {
        self.identities.insert(address.into(), registration);
        self
    }

    /// Make `child` a sub-account of `parent`, named `sub_name`
    pub fn with_super(mut self, child: &str, parent: &str, sub_name: &str) -> Self {
        self.supers.insert(
            child.into(),
            SuperLink {
                parent: parent.into(),
                sub_display: IdentityData::from(sub_name),
            },
        );
        self
    }

    /// Register call metadata under `index`
    pub fn with_call(mut self, index: CallIndex, meta: CallMetadata) -> Self {
        self.calls.insert(index, meta);
        self
    }

    /// Store a treasury proposal
    pub fn with_proposal(mut self, index: ProposalIndex, record: ProposalRecord) -> Self {
        self.proposals.insert(index, record);
        self
    }

    /// Append `index` to the approval queue
    pub fn with_approval(mut self, index: ProposalIndex) -> Self {
        self.approvals.push(index);
        self
    }

    /// Append an open motion
    pub fn with_motion(mut self, motion: CollectiveProposal) -> Self {
        self.motions.push(motion);
        self
    }

    /// Set the collective's members
    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.members = members.iter().map(|m| Address::from(*m)).collect();
        self
    }

    /// Make every lookup against `table` fail with a transport error
    pub fn failing_on(mut self, table: Table) -> Self {
        self.failing.insert(table);
        self
    }

    /// The async round trips made so far, in order
    pub fn lookups(&self) -> Vec<Lookup> {
        self.log().clone()
    }

    fn log(&self) -> MutexGuard<'_, Vec<Lookup>> {
        self.lookups.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, lookup: Lookup, table: Table) -> Result<(), RegistryError> {
        self.log().push(lookup);
        if self.failing.contains(&table) {
            return Err(RegistryError::Transport(format!(
                "mock chain: {:?} is unavailable",
                table
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityRegistry for MockChain {
    async fn identity_of(
        &self,
        address: &Address,
    ) -> Result<Option<IdentityRegistration>, RegistryError> {
        self.record(Lookup::IdentityOf(address.clone()), Table::IdentityOf)?;
        Ok(self.identities.get(address).cloned())
    }

    async fn super_of(&self, address: &Address) -> Result<Option<SuperLink>, RegistryError> {
        self.record(Lookup::SuperOf(address.clone()), Table::SuperOf)?;
        Ok(self.supers.get(address).cloned())
    }
}

impl CallMetadataRegistry for MockChain {
    fn find_meta_call(&self, index: CallIndex) -> Result<CallMetadata, RegistryError> {
        self.calls
            .get(&index)
            .cloned()
            .ok_or(RegistryError::UnknownCall(index))
    }
}

#[async_trait]
impl ProposalStore for MockChain {
    async fn proposal(
        &self,
        index: ProposalIndex,
    ) -> Result<Option<ProposalRecord>, RegistryError> {
        self.record(Lookup::Proposal(index), Table::Proposal)?;
        Ok(self.proposals.get(&index).cloned())
    }

    async fn proposals(&self) -> Result<Vec<(ProposalIndex, ProposalRecord)>, RegistryError> {
        self.record(Lookup::Proposals, Table::Proposals)?;
        Ok(self
            .proposals
            .iter()
            .map(|(index, record)| (*index, record.clone()))
            .collect())
    }

    async fn approvals(&self) -> Result<Vec<ProposalIndex>, RegistryError> {
        self.record(Lookup::Approvals, Table::Approvals)?;
        Ok(self.approvals.clone())
    }
}

#[async_trait]
impl CollectiveStore for MockChain {
    async fn proposals(&self) -> Result<Vec<CollectiveProposal>, RegistryError> {
        self.record(Lookup::Motions, Table::Motions)?;
        Ok(self.motions.clone())
    }

    async fn members(&self) -> Result<Vec<Address>, RegistryError> {
        self.record(Lookup::Members, Table::Members)?;
        Ok(self.members.clone())
    }
}

/// A registration with a raw display name and `judgements` `KnownGood` verdicts.
///
/// An empty `display` leaves the field unset.
pub fn registration(display: &str, judgements: u32) -> IdentityRegistration {
    let display = if display.is_empty() {
        IdentityData::None
    } else {
        IdentityData::from(display)
    };
    IdentityRegistration {
        judgements: (0..judgements).map(|i| (i, Judgement::KnownGood)).collect(),
        deposit: 0,
        info: IdentityInfo {
            display,
            ..Default::default()
        },
    }
}

/// A non-origin argument descriptor
pub fn arg(name: &str, type_name: &str) -> ArgumentDescriptor {
    ArgumentDescriptor {
        name: name.to_string(),
        type_name: type_name.to_string(),
        is_origin: false,
    }
}

/// The origin argument some metadata lists first
pub fn origin_arg() -> ArgumentDescriptor {
    ArgumentDescriptor {
        name: "origin".to_string(),
        type_name: "Origin".to_string(),
        is_origin: true,
    }
}

/// Call metadata with the given arguments and documentation lines
pub fn call_meta(
    section: &str,
    method: &str,
    args: Vec<ArgumentDescriptor>,
    documentation: &[&str],
) -> CallMetadata {
    CallMetadata {
        section: section.to_string(),
        method: method.to_string(),
        args,
        documentation: documentation.iter().map(|line| line.to_string()).collect(),
    }
}

/// A treasury proposal record
pub fn proposal(proposer: &str, beneficiary: &str, value: u128, bond: u128) -> ProposalRecord {
    ProposalRecord {
        proposer: proposer.into(),
        value,
        beneficiary: beneficiary.into(),
        bond,
    }
}

/// An open motion proposing `call`, with the given tally
pub fn motion(
    hash: [u8; 32],
    call: CallReference,
    index: u32,
    threshold: u32,
    ayes: &[&str],
    nays: &[&str],
) -> CollectiveProposal {
    CollectiveProposal {
        hash,
        proposal: call,
        votes: Some(MotionVotes {
            index,
            threshold,
            ayes: ayes.iter().map(|a| Address::from(*a)).collect(),
            nays: nays.iter().map(|n| Address::from(*n)).collect(),
        }),
    }
}
