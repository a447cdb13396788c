use sha2::{Digest, Sha256};

use fieldlens_normalize::Result;

use crate::outcome::{ReviewOptions, ReviewOutcome};

/// Single-slot memo table for the active review.
///
/// Keyed by content hash of the raw result bytes plus an options
/// fingerprint; invalidated by recomputing the key and comparing, never by
/// time. Exactly one outcome is cached — the interactive flow reviews one
/// document at a time, so there is no LRU and no concurrent access.
#[derive(Debug, Default)]
pub struct ReviewSession {
    slot: Option<(String, ReviewOutcome)>,
    recomputations: u64,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Review a raw analysis-result document, reusing the cached outcome
    /// when neither the bytes nor the options changed.
    pub fn review(&mut self, result_bytes: &[u8], options: &ReviewOptions) -> Result<&ReviewOutcome> {
        let key = cache_key(result_bytes, options);

        let slot = match self.slot.take() {
            Some((cached_key, outcome)) if cached_key == key => (cached_key, outcome),
            _ => {
                let result: serde_json::Value = serde_json::from_slice(result_bytes)?;
                self.recomputations += 1;
                (key, ReviewOutcome::from_result(&result, options))
            }
        };

        let (_, outcome) = self.slot.insert(slot);
        Ok(outcome)
    }

    /// Number of cache misses so far; visible for diagnostics and tests.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

fn cache_key(result_bytes: &[u8], options: &ReviewOptions) -> String {
    let mut hasher = Sha256::new();
    hasher.update(result_bytes);
    format!("{:x}:{}", hasher.finalize(), options.fingerprint())
}
