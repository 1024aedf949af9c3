//! Canonical payload encoding
//!
//! The paying contract compares the payload verbatim against stored login
//! mappings, so the encoding adds nothing: no quotes, whitespace, or framing.

use crate::types::ResolutionResult;

/// Payload returned when no qualifying resolution was found
pub const NOT_FOUND: &str = "not_found";

/// UTF-8 byte payload handed back to the calling environment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedResult(Vec<u8>);

impl EncodedResult {
    /// Raw payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload as text
    ///
    /// Always valid: the payload is built from a `&str`.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// `0x`-prefixed lowercase hex of the payload, as on-chain tooling expects
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    /// Whether this is the `not_found` sentinel
    pub fn is_not_found(&self) -> bool {
        self.0 == NOT_FOUND.as_bytes()
    }
}

impl std::fmt::Display for EncodedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode a resolution result into its canonical payload
pub fn encode(result: &ResolutionResult) -> EncodedResult {
    let text = match result {
        ResolutionResult::Winner { login } => login.as_str(),
        ResolutionResult::Unresolved => NOT_FOUND,
    };
    EncodedResult(text.as_bytes().to_vec())
}
