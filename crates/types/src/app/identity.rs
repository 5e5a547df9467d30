// Path: crates/types/src/app/identity.rs

//! Identity records as stored by the chain's identity pallet, and the
//! `IdentityResult` the resolver derives from them.

use super::Balance;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// An opaque, textual identifier of a chain account (typically SS58).
///
/// Addresses are compared by value and never interpreted by this workspace.
#[derive(
    Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash,
)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    /// Returns the textual form of the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The index of a registrar in the identity pallet's registrar list.
pub type RegistrarIndex = u32;

/// A field of an identity record. Only `Raw` carries displayable bytes; the
/// hashed variants commit to a value without revealing it.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub enum IdentityData {
    /// The field is not set.
    #[default]
    None,
    /// The field holds raw bytes, usually UTF-8 text.
    Raw(Vec<u8>),
    /// A BLAKE2-256 hash of the value.
    BlakeTwo256([u8; 32]),
    /// A SHA2-256 hash of the value.
    Sha256([u8; 32]),
    /// A Keccak-256 hash of the value.
    Keccak256([u8; 32]),
    /// A SHA3-256 hash of the value.
    ShaThree256([u8; 32]),
}

impl IdentityData {
    /// Returns the raw bytes of the field, or an empty slice for any non-`Raw` variant.
    pub fn as_raw(&self) -> &[u8] {
        match self {
            Self::Raw(bytes) => bytes,
            _ => &[],
        }
    }
}

impl From<&str> for IdentityData {
    fn from(s: &str) -> Self {
        Self::Raw(s.as_bytes().to_vec())
    }
}

/// The informational part of an identity registration.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct IdentityInfo {
    /// The display name; the only field this workspace renders.
    pub display: IdentityData,
    /// The legal name.
    pub legal: IdentityData,
    /// A website.
    pub web: IdentityData,
    /// A Matrix handle.
    pub riot: IdentityData,
    /// An email address.
    pub email: IdentityData,
    /// A Twitter handle.
    pub twitter: IdentityData,
}

/// A registrar's verdict on an identity.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Judgement {
    /// No judgement has been given yet.
    Unknown,
    /// A fee has been reserved for a pending judgement.
    FeePaid(#[serde(with = "crate::app::balance_str")] Balance),
    /// The data appears reasonable, but no in-depth checks were done.
    Reasonable,
    /// The registrar has verified the information.
    KnownGood,
    /// The information was once good but is now out of date.
    OutOfDate,
    /// The information is low quality or imprecise.
    LowQuality,
    /// The information is erroneous.
    Erroneous,
}

/// An identity registration attached to an address.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct IdentityRegistration {
    /// Registrar verdicts, in the order the registry returns them.
    pub judgements: Vec<(RegistrarIndex, Judgement)>,
    /// The amount held on deposit for this registration.
    #[serde(with = "crate::app::balance_str")]
    pub deposit: Balance,
    /// The identity fields.
    pub info: IdentityInfo,
}

impl IdentityRegistration {
    /// The raw display bytes of this registration (empty if not a `Raw` field).
    pub fn display_bytes(&self) -> &[u8] {
        self.info.display.as_raw()
    }

    /// Returns true if at least one registrar has judged this identity.
    pub fn has_judgements(&self) -> bool {
        !self.judgements.is_empty()
    }
}

/// A sub-account's pointer to the parent account holding its identity.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SuperLink {
    /// The parent ("super") account.
    pub parent: Address,
    /// The name of this sub-account under its parent.
    pub sub_display: IdentityData,
}

/// The outcome of resolving an address to a human-readable identity.
///
/// Access to `display` and `registration` requires matching on `Resolved`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IdentityResult {
    /// An identity was found, either directly or through the account's parent.
    Resolved {
        /// The address owning the registration. For a sub-account this is the parent.
        address: Address,
        /// The decoded display name, never empty.
        display: String,
        /// Whether the registration carries at least one judgement.
        has_judgements: bool,
        /// The registration the display was taken from.
        registration: IdentityRegistration,
    },
    /// No identity could be found for the queried address.
    Unresolved {
        /// The queried address.
        address: Address,
    },
}

impl IdentityResult {
    /// The address carried by the result. See `Resolved::address`.
    pub fn address(&self) -> &Address {
        match self {
            Self::Resolved { address, .. } | Self::Unresolved { address } => address,
        }
    }

    /// Returns true if an identity was resolved.
    pub fn has_identity(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Whether the resolved registration has judgements. Always false when unresolved.
    pub fn has_judgements(&self) -> bool {
        match self {
            Self::Resolved { has_judgements, .. } => *has_judgements,
            Self::Unresolved { .. } => false,
        }
    }

    /// The display name, if resolved.
    pub fn display(&self) -> Option<&str> {
        match self {
            Self::Resolved { display, .. } => Some(display),
            Self::Unresolved { .. } => None,
        }
    }

    /// The text shown for this account: its display name, or its address when unresolved.
    pub fn label(&self) -> &str {
        match self {
            Self::Resolved { display, .. } => display,
            Self::Unresolved { address } => address.as_str(),
        }
    }

    /// The judgements to badge the account with, only present when there are any.
    pub fn judgements(&self) -> Option<&[(RegistrarIndex, Judgement)]> {
        match self {
            Self::Resolved {
                has_judgements: true,
                registration,
                ..
            } => Some(&registration.judgements),
            _ => None,
        }
    }
}
