// Path: crates/types/src/app/call.rs

//! Opaque calls, the registry metadata that describes them, and the displayable
//! parameter lists derived from both.

use super::{Address, Balance};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The lookup key of a call: `[pallet_index, call_index]`.
#[derive(
    Encode, Decode, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash,
)]
pub struct CallIndex(pub [u8; 2]);

impl core::fmt::Display for CallIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A `section.method` pair naming a call, e.g. `treasury.approveProposal`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct CallPath {
    /// The pallet name.
    pub section: String,
    /// The call name within the pallet.
    pub method: String,
}

impl CallPath {
    /// Creates a new path from a section and method name.
    pub fn new(section: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
        }
    }
}

impl core::fmt::Display for CallPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.section, self.method)
    }
}

/// The value of a parameter.
///
/// Arguments taken from a call are kept in their encoded form; values
/// synthesized from other chain records are already typed.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum RawValue {
    /// SCALE-encoded bytes of a call argument.
    Encoded(Vec<u8>),
    /// An account.
    Account(Address),
    /// A balance.
    Balance(#[serde(with = "crate::app::balance_str")] Balance),
}

impl core::fmt::Display for RawValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Encoded(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            Self::Account(address) => write!(f, "{}", address),
            Self::Balance(value) => write!(f, "{}", value),
        }
    }
}

/// The structure of a registry type, as far as rendering cares.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum TypeInfo {
    /// Any type without further structure, by name.
    Plain(String),
    /// `Compact<T>`.
    Compact(Box<TypeInfo>),
    /// `Vec<T>`.
    Vec(Box<TypeInfo>),
    /// `Option<T>`.
    Option(Box<TypeInfo>),
    /// `(A, B, ...)`.
    Tuple(Vec<TypeInfo>),
    /// `[T; N]`.
    VecFixed(Box<TypeInfo>, usize),
}

impl TypeInfo {
    /// Parses a registry type name. Never fails: anything unrecognised is `Plain`.
    pub fn parse(type_name: &str) -> Self {
        let name = type_name.trim();

        if let Some(inner) = name.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            return Self::Tuple(
                split_top_level(inner, ',')
                    .iter()
                    .filter(|part| !part.trim().is_empty())
                    .map(|part| Self::parse(part))
                    .collect(),
            );
        }

        if let Some(inner) = name.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let parts = split_top_level(inner, ';');
            if let [elem, len] = parts.as_slice() {
                if let Ok(len) = len.trim().parse::<usize>() {
                    return Self::VecFixed(Box::new(Self::parse(elem)), len);
                }
            }
            return Self::Plain(name.to_owned());
        }

        if let Some((wrapper, rest)) = name.split_once('<') {
            if let Some(inner) = rest.strip_suffix('>') {
                match wrapper.trim() {
                    "Compact" => return Self::Compact(Box::new(Self::parse(inner))),
                    "Vec" => return Self::Vec(Box::new(Self::parse(inner))),
                    "Option" => return Self::Option(Box::new(Self::parse(inner))),
                    "Box" => return Self::parse(inner),
                    _ => {}
                }
            }
        }

        Self::Plain(name.to_owned())
    }
}

/// Splits `s` on `sep` wherever it is not nested inside `<>`, `()` or `[]`.
fn split_top_level(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c == sep && depth == 0 {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// A registry type name together with its parsed structure.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct TypeDescriptor {
    /// The type name as the registry spells it.
    pub type_name: String,
    /// The parsed structure of `type_name`.
    pub info: TypeInfo,
}

impl TypeDescriptor {
    /// Builds a descriptor from a registry type name.
    pub fn from_type_name(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_owned(),
            info: TypeInfo::parse(type_name),
        }
    }

    /// The descriptor used for synthesized account values.
    pub fn account_id() -> Self {
        Self::from_type_name("AccountId")
    }

    /// The descriptor used for synthesized balance values.
    pub fn balance() -> Self {
        Self::from_type_name("Balance")
    }
}

/// The registry's description of one call argument.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ArgumentDescriptor {
    /// The argument name.
    pub name: String,
    /// The registry type name.
    pub type_name: String,
    /// Whether this argument is the call's origin (never displayed).
    pub is_origin: bool,
}

/// Everything the registry knows about a call index.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CallMetadata {
    /// The pallet name.
    pub section: String,
    /// The call name.
    pub method: String,
    /// The declared arguments, in positional order.
    pub args: Vec<ArgumentDescriptor>,
    /// Raw documentation lines.
    pub documentation: Vec<String>,
}

impl CallMetadata {
    /// The `section.method` path of the call.
    pub fn path(&self) -> CallPath {
        CallPath::new(self.section.clone(), self.method.clone())
    }

    /// The declared arguments, with origin arguments removed.
    pub fn display_args(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.args.iter().filter(|arg| !arg.is_origin)
    }
}

/// An opaque call: a metadata lookup key and its SCALE-encoded arguments.
///
/// The argument list lines up with the call's non-origin descriptors.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CallReference {
    /// The metadata lookup key.
    pub call_index: CallIndex,
    /// The encoded argument values, in positional order.
    pub args: Vec<Vec<u8>>,
}

/// One displayable argument or synthesized value.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Param {
    /// The parameter name.
    pub name: String,
    /// The parameter type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// The parameter value.
    pub value: RawValue,
}

/// A call decoded into its path, documentation and parameters.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CallDescriptor {
    /// The pallet name.
    pub section: String,
    /// The call name.
    pub method: String,
    /// Raw documentation lines, as the registry returned them.
    pub documentation_lines: Vec<String>,
    /// The call's displayable arguments.
    pub params: Vec<Param>,
}

impl CallDescriptor {
    /// The `section.method` path of the call.
    pub fn path(&self) -> CallPath {
        CallPath::new(self.section.clone(), self.method.clone())
    }
}
