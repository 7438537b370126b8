use serde::{Deserialize, Serialize};

use crate::config::CanonicalConfig;
use crate::normalize::normalize;

/// FNV-1a offset basis (32-bit).
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
/// FNV-1a prime (32-bit).
const FNV_PRIME: u32 = 0x0100_0193;

/// Identity keys derived from one paragraph's canonical text.
///
/// `key` is the primary identity: `<length>:<hash8>` where `length` is the
/// character count of the canonical string and `hash8` the zero-padded
/// 8-hex-digit FNV-1a digest. Hash collisions between distinct canonical
/// strings of the same length are possible in principle; the pair is
/// treated as practically unique, never as a cryptographic guarantee.
///
/// The legacy prefix keys are weaker identities used only when the exact
/// key fails, e.g. when a trailing sentence was appended or removed. They
/// are computed the same way on the index side and the query side so the
/// two are always comparable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    /// Canonical comparison form of the paragraph text.
    pub canonical: String,
    /// Primary identity key, `<length>:<hash8>`.
    pub key: String,
    /// Long prefix key; present only when the canonical text clears the
    /// long minimum-length gate.
    pub legacy80: Option<String>,
    /// Short prefix key; present only when the canonical text clears the
    /// short minimum-length gate.
    pub legacy30: Option<String>,
}

/// Compute the 32-bit FNV-1a digest of a canonical string.
///
/// Wrapping u32 arithmetic is the native form of the classic
/// multiply-accumulate decomposition used on platforms without 64-bit
/// integers; the digests are identical.
pub fn fnv1a32(text: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in text.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Format the primary identity key for an already-canonical string.
///
/// Canonical text is ASCII by construction, so the byte length equals the
/// character length.
pub fn exact_key(canonical: &str) -> String {
    debug_assert!(canonical.is_ascii());
    format!("{}:{:08x}", canonical.len(), fnv1a32(canonical))
}

/// Derive the identity keys for a raw paragraph text.
///
/// Returns `None` when normalization yields an empty string (whitespace-only
/// or marker-only blocks). Such blocks are never matchable and must be kept
/// out of both index and queries.
pub fn fingerprint(raw: &str, cfg: &CanonicalConfig) -> Option<Fingerprint> {
    let canonical = normalize(raw);
    if canonical.is_empty() {
        return None;
    }
    let key = exact_key(&canonical);
    let legacy80 = legacy_prefix(&canonical, cfg.long_prefix_len, cfg.long_prefix_min);
    let legacy30 = legacy_prefix(&canonical, cfg.short_prefix_len, cfg.short_prefix_min);
    Some(Fingerprint {
        canonical,
        key,
        legacy80,
        legacy30,
    })
}

fn legacy_prefix(canonical: &str, prefix_len: usize, min_len: usize) -> Option<String> {
    if canonical.len() < min_len {
        return None;
    }
    let cut = canonical.len().min(prefix_len);
    Some(canonical[..cut].to_string())
}
