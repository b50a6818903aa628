//! Selector entries and the generation model.
//!
//! Pure data: nothing here knows about templates. The renderer reads the
//! derived helpers (`params`, `signature_args`, `arg_kinds`, ...) off each
//! entry.

use alloy_primitives::Address;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::{ARG_KIND_PREFIX, LOG_FN_NAME, PARAM_PREFIX};
use crate::errors::GenError;
use crate::selector::{canonical_text, Selector};
use crate::signature::{enumerate, expected_count, Signature};
use crate::vocabulary::Vocabulary;

/// One `log` overload with its canonical text, selector and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    canonical_text: String,
    selector: Selector,
    args: Signature,
    is_log: bool,
}

impl SelectorEntry {
    /// Derive the entry for a signature. `vocabulary` decides generic-log eligibility.
    pub fn new(args: Signature, vocabulary: &Vocabulary) -> Self {
        let canonical_text = canonical_text(&args);
        let selector = Selector::of(&canonical_text);
        let is_log = match args.args() {
            [single] => vocabulary.is_combinable(single),
            _ => true,
        };
        Self { canonical_text, selector, args, is_log }
    }

    /// `log(string,uint)`
    pub fn canonical_text(&self) -> &str {
        &self.canonical_text
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn args(&self) -> &Signature {
        &self.args
    }

    /// Single-argument overload that also gets a typed name (`logString`).
    pub fn is_log_type(&self) -> bool {
        self.args.arity() == 1
    }

    /// Exposed through the generic overloaded `log` function.
    pub fn is_log(&self) -> bool {
        self.is_log
    }

    /// Parameter names: `p0, p1, p2`.
    pub fn params(&self) -> String {
        (0..self.args.arity()).map(|i| format!("{PARAM_PREFIX}{i}")).collect::<Vec<_>>().join(", ")
    }

    /// Solidity parameter list: `string memory p0, uint p1`.
    pub fn signature_args(&self) -> String {
        self.args
            .args()
            .iter()
            .enumerate()
            .map(|(i, ty)| {
                if ty.is_reference() {
                    format!("{ty} memory {PARAM_PREFIX}{i}")
                } else {
                    format!("{ty} {PARAM_PREFIX}{i}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Argument decoder identifiers, one per parameter: `ArgKind::String, ArgKind::Uint`.
    pub fn arg_kinds(&self) -> Vec<String> {
        self.args.args().iter().map(|ty| format!("{ARG_KIND_PREFIX}{}", ty.capitalized())).collect()
    }

    /// Typed function name (`logString`); `None` unless the entry has exactly one argument.
    pub fn typed_name(&self) -> Option<String> {
        match self.args.args() {
            [single] => Some(format!("{LOG_FN_NAME}{}", single.capitalized())),
            _ => None,
        }
    }
}

/// Fixed contract address plus every entry in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationModel {
    address: Address,
    entries: Vec<SelectorEntry>,
}

impl GenerationModel {
    /// Enumerate the vocabulary's signatures and derive one entry for each.
    ///
    /// Fails if two signatures share a selector.
    pub fn build(address: Address, vocabulary: &Vocabulary) -> Result<Self, GenError> {
        let entries: Vec<SelectorEntry> = enumerate(vocabulary)
            .into_iter()
            .map(|sig| SelectorEntry::new(sig, vocabulary))
            .collect();
        debug_assert_eq!(entries.len(), expected_count(vocabulary));
        debug!(target: "console_gen::model", count = entries.len(), "derived selector entries");

        let model = Self { address, entries };
        model.ensure_unique_selectors()?;
        Ok(model)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn entries(&self) -> &[SelectorEntry] {
        &self.entries
    }

    /// Reject the model if any selector appears twice.
    pub fn ensure_unique_selectors(&self) -> Result<(), GenError> {
        let mut seen: HashMap<Selector, &str> = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            if let Some(first) = seen.insert(entry.selector(), entry.canonical_text()) {
                return Err(GenError::SelectorCollision {
                    selector: entry.selector(),
                    first: first.to_string(),
                    second: entry.canonical_text().to_string(),
                });
            }
        }
        Ok(())
    }
}
