// Path: crates/api/src/text/mod.rs

//! Defines the `TextDecoder` trait used to turn identity bytes into display text.

/// Decodes raw identity bytes into text.
///
/// Decoding never fails: bytes that are not valid text decode to the empty
/// string, which callers treat the same as an unset name.
pub trait TextDecoder: Send + Sync {
    /// Decodes `bytes` into a display string.
    fn decode_text(&self, bytes: &[u8]) -> String;
}

/// Strict UTF-8 decoding, the encoding identity fields are written in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8TextDecoder;

impl TextDecoder for Utf8TextDecoder {
    fn decode_text(&self, bytes: &[u8]) -> String {
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}
