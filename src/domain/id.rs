//! Server-side user id generation.
//!
//! Ids are 64-bit values built from the process startup time and a
//! per-process counter, rendered as decimal strings. Uniqueness holds
//! across concurrent requests within a process and across restarts
//! more than a second apart; collisions are surfaced by the store's
//! primary-key constraint rather than retried.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;

/// Bits reserved for the per-process sequence counter.
const SEQUENCE_BITS: u32 = 24;

static STARTUP_SECONDS: Lazy<u64> = Lazy::new(|| {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
});

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate the next user id as a decimal string.
pub fn next_user_id() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed) & ((1u64 << SEQUENCE_BITS) - 1);
    let id = (*STARTUP_SECONDS << SEQUENCE_BITS) | seq;
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_a_burst() {
        let ids: HashSet<String> = (0..10_000).map(|_| next_user_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn ids_are_decimal_u64_strings() {
        let id = next_user_id();
        assert!(id.parse::<u64>().is_ok(), "id {id} should fit in u64");
    }
}
