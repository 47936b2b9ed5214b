// src/audit/synth.rs
//! Synthetic identifier batches for audit runs.
//!
//! Batches are path-like dummy identifiers (`segment/segment/segment`)
//! drawn from the same frozen generator family as locators, so any batch
//! is reproducible from its seed string alone.

use crate::locator;

/// Letters used in synthetic path segments, lowercase then uppercase.
const SEGMENT_LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Segments per synthetic identifier.
const SEGMENTS: usize = 3;

/// Segment length bounds, inclusive.
const MIN_SEGMENT: usize = 4;
const MAX_SEGMENT: usize = 24;

/// Produces `count` synthetic identifiers, deterministically from `seed`.
///
/// Identifiers are three `/`-joined segments of 4 to 24 ASCII letters.
/// Repeats within a batch are astronomically unlikely but not impossible;
/// the auditor's key-uniqueness check covers that case rather than this
/// function deduplicating.
#[must_use]
pub fn synthesize(count: usize, seed: &str) -> Vec<String> {
    let mut rng = locator::seeded_rng(seed);
    let span = (MAX_SEGMENT - MIN_SEGMENT + 1) as u32;

    let mut batch = Vec::with_capacity(count);
    for _ in 0..count {
        let mut identifier = String::new();
        for segment in 0..SEGMENTS {
            if segment > 0 {
                identifier.push('/');
            }
            let len = MIN_SEGMENT + locator::draw_index(&mut rng, span);
            for _ in 0..len {
                let idx = locator::draw_index(&mut rng, SEGMENT_LETTERS.len() as u32);
                identifier.push(SEGMENT_LETTERS[idx] as char);
            }
        }
        batch.push(identifier);
    }
    batch
}
