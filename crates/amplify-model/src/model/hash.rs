//! Structural hashing compatible with the service SDK's `hashCode`.
//!
//! Arithmetic is 32-bit and wrapping, so hashes agree across implementations
//! for equal values.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Hash multiplier applied per field.
pub const HASH_PRIME: i32 = 31;

/// Fold per-field hashes: start at 1, then `h = 31 * h + field_hash`.
pub fn combine_hashes(hashes: impl IntoIterator<Item = i32>) -> i32 {
    hashes
        .into_iter()
        .fold(1_i32, |acc, h| acc.wrapping_mul(HASH_PRIME).wrapping_add(h))
}

/// String hash over UTF-16 code units: `s[0]*31^(n-1) + ... + s[n-1]`.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0_i32, |acc, unit| acc.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit)))
}

pub(crate) const fn bool_hash(value: bool) -> i32 {
    if value { 1231 } else { 1237 }
}

/// Millisecond timestamp folded to 32 bits: `(int)(ms ^ (ms >>> 32))`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub(crate) fn timestamp_hash(value: &DateTime<Utc>) -> i32 {
    let millis = value.timestamp_millis();
    (millis ^ ((millis as u64) >> 32) as i64) as i32
}

/// Sum of `key_hash ^ value_hash` over the entries.
pub(crate) fn map_hash(map: &BTreeMap<String, String>) -> i32 {
    map.iter().fold(0_i32, |acc, (k, v)| {
        acc.wrapping_add(string_hash(k) ^ string_hash(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        // Overflows and wraps like 32-bit arithmetic
        assert_eq!(string_hash("hello world"), 1_794_106_052);
    }

    #[test]
    fn test_string_hash_uses_utf16_units() {
        // U+1F600 is a surrogate pair in UTF-16
        let expected = 0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(string_hash("\u{1F600}"), expected);
    }

    #[test]
    fn test_combine_hashes() {
        assert_eq!(combine_hashes([]), 1);
        assert_eq!(combine_hashes([0]), 31);
        assert_eq!(combine_hashes([0, 0]), 961);
        assert_eq!(combine_hashes([5, 7]), (31 + 5) * 31 + 7);
    }

    #[test]
    fn test_bool_hash() {
        assert_eq!(bool_hash(true), 1231);
        assert_eq!(bool_hash(false), 1237);
    }

    #[test]
    fn test_timestamp_hash_epoch() {
        let epoch = DateTime::<Utc>::from_timestamp_millis(0).unwrap();
        assert_eq!(timestamp_hash(&epoch), 0);
        let t = DateTime::<Utc>::from_timestamp_millis(1_000).unwrap();
        assert_eq!(timestamp_hash(&t), 1_000);
    }

    #[test]
    fn test_map_hash_is_order_independent() {
        let a: BTreeMap<String, String> =
            [("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())].into();
        assert_eq!(map_hash(&a), (97 ^ 49) + (98 ^ 50));
        assert_eq!(map_hash(&BTreeMap::new()), 0);
    }
}
