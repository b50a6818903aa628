use alloy_primitives::keccak256;
use std::fmt;

use crate::constants::LOG_FN_NAME;
use crate::signature::Signature;

/// Compute the Solidity function selector (first 4 bytes of keccak256(signature)).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Canonical text of a `log` overload: `log(string,uint)`.
pub fn canonical_text(signature: &Signature) -> String {
    format!("{LOG_FN_NAME}({})", signature.joined())
}

/// 4-byte dispatch selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Wrap raw selector bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Selector of a canonical function signature text.
    pub fn of(canonical_text: &str) -> Self {
        Self(function_selector(canonical_text))
    }

    /// Raw bytes.
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }

    /// Rust array literal: `[0x51, 0x97, 0x3e, 0xc9]`.
    pub fn array_literal(&self) -> String {
        let [a, b, c, d] = self.0;
        format!("[0x{a:02x}, 0x{b:02x}, 0x{c:02x}, 0x{d:02x}]")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
