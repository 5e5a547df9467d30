// Path: crates/types/src/app/mod.rs

//! Chain records as exposed by the registry, and the display values derived from them.

mod call;
mod collective;
mod identity;
mod treasury;

pub use call::*;
pub use collective::*;
pub use identity::*;
pub use treasury::*;

/// A balance amount in the chain's smallest unit.
pub type Balance = u128;

/// Serde helpers writing a `Balance` as a decimal string.
///
/// `u128` does not survive JSON numbers or the buffering serde does for
/// internally tagged enums such as `IdentityResult`.
pub(crate) mod balance_str {
    use super::Balance;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Balance, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Balance, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}
