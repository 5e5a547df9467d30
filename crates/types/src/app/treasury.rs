// Path: crates/types/src/app/treasury.rs

use super::{Address, Balance};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The index of a treasury spending proposal.
pub type ProposalIndex = u32;

/// A pending or approved treasury spending proposal.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ProposalRecord {
    /// The account that submitted the proposal.
    pub proposer: Address,
    /// The amount to be paid out.
    #[serde(with = "crate::app::balance_str")]
    pub value: Balance,
    /// The account to receive the payout.
    pub beneficiary: Address,
    /// The amount held on deposit by the proposer.
    #[serde(with = "crate::app::balance_str")]
    pub bond: Balance,
}
