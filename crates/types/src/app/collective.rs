// Path: crates/types/src/app/collective.rs

//! Council motions: a call awaiting a collective vote.

use super::{Address, CallReference};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The running tally of a motion.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct MotionVotes {
    /// The motion's sequential index.
    pub index: u32,
    /// The number of ayes needed to pass.
    pub threshold: u32,
    /// Members who voted aye.
    pub ayes: Vec<Address>,
    /// Members who voted nay.
    pub nays: Vec<Address>,
}

/// A motion as returned by the collective: its hash, the proposed call and the votes so far.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CollectiveProposal {
    /// The hash of the proposed call.
    pub hash: [u8; 32],
    /// The proposed call.
    pub proposal: CallReference,
    /// The tally, absent once the motion has been closed.
    pub votes: Option<MotionVotes>,
}
