// crates/types/src/codec.rs

//! Thin wrappers around `parity-scale-codec` (SCALE), the binary format the
//! chain stores records and call arguments in.
//!
//! Every decode here fails fast: trailing bytes are an error, so a value that
//! decodes is exactly the value the chain encoded.

use parity_scale_codec::{Compact, Decode, DecodeAll, Encode};

/// Decodes a value from its canonical SCALE byte representation.
///
/// # Returns
///
/// The decoded value of type `T` on success, or a `String` detailing the error.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}

/// Decodes a `Compact<u32>` index, such as a treasury proposal index taken from
/// a call argument.
pub fn decode_compact_index(b: &[u8]) -> Result<u32, String> {
    from_bytes_canonical::<Compact<u32>>(b).map(|c| c.0)
}

/// Encodes an index as `Compact<u32>`.
pub fn encode_compact_index(index: u32) -> Vec<u8> {
    Compact(index).encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{IdentityData, IdentityInfo, IdentityRegistration, Judgement};

    #[test]
    fn test_registration_survives_canonical_codec() {
        let registration = IdentityRegistration {
            judgements: vec![(1, Judgement::KnownGood), (3, Judgement::FeePaid(10))],
            deposit: 1_000,
            info: IdentityInfo {
                display: IdentityData::from("Alice"),
                ..Default::default()
            },
        };

        let encoded = registration.encode();
        let decoded = from_bytes_canonical::<IdentityRegistration>(&encoded).unwrap();
        assert_eq!(registration, decoded);
    }

    #[test]
    fn test_canonical_decode_rejects_truncation() {
        let mut encoded = IdentityData::from("Bob").encode();
        encoded.pop();

        let err = from_bytes_canonical::<IdentityData>(&encoded).unwrap_err();
        assert!(err.contains("canonical decode failed"));
    }

    #[test]
    fn test_compact_index_single_and_multi_byte() {
        // Single-byte mode: value << 2.
        assert_eq!(decode_compact_index(&[0x0c]).unwrap(), 3);
        // Two-byte mode.
        assert_eq!(decode_compact_index(&[0x15, 0x01]).unwrap(), 69);
        assert_eq!(decode_compact_index(&encode_compact_index(1_000_000)).unwrap(), 1_000_000);
    }

    #[test]
    fn test_compact_index_rejects_garbage() {
        assert!(decode_compact_index(&[]).is_err());
        assert!(decode_compact_index(&[0x15]).unwrap_err().contains("canonical decode failed"));
        // Trailing byte after a complete single-byte compact.
        assert!(decode_compact_index(&[0x0c, 0x00]).is_err());
    }
}
