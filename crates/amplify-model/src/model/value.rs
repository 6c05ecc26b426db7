//! [`FieldValue`] for the scalar and collection field types.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use super::hash::{bool_hash, combine_hashes, map_hash, string_hash, timestamp_hash};
use super::{FieldValue, Shape};

/// Cut a timestamp to the millisecond precision the service keeps.
///
/// Timestamp setters store through this so values survive the epoch-seconds
/// wire form unchanged.
pub fn millis_precision(time: DateTime<Utc>) -> DateTime<Utc> {
    time.trunc_subsecs(3)
}

impl FieldValue for String {
    fn render_value(&self, out: &mut String) {
        out.push_str(self);
    }

    fn value_hash(&self) -> i32 {
        string_hash(self)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn query_values(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl FieldValue for bool {
    fn render_value(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    fn value_hash(&self) -> i32 {
        bool_hash(*self)
    }

    fn query_values(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl FieldValue for i32 {
    fn render_value(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }

    fn value_hash(&self) -> i32 {
        *self
    }

    fn as_integer(&self) -> Option<i64> {
        Some(i64::from(*self))
    }

    fn query_values(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl FieldValue for DateTime<Utc> {
    fn render_value(&self, out: &mut String) {
        out.push_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    fn value_hash(&self) -> i32 {
        timestamp_hash(self)
    }

    fn query_values(&self) -> Vec<String> {
        vec![self.to_rfc3339_opts(SecondsFormat::AutoSi, true)]
    }
}

/// Sequences render as `[a, b]` and hash element-wise from a start of 1.
impl<T: FieldValue> FieldValue for Vec<T> {
    fn render_value(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.render_value(out);
        }
        out.push(']');
    }

    fn value_hash(&self) -> i32 {
        combine_hashes(self.iter().map(FieldValue::value_hash))
    }

    fn nested(&self) -> Vec<&dyn Shape> {
        self.iter().flat_map(FieldValue::nested).collect()
    }

    fn is_sequence(&self) -> bool {
        true
    }

    fn query_values(&self) -> Vec<String> {
        self.iter().flat_map(FieldValue::query_values).collect()
    }
}

/// String maps render as `{k=v, k2=v2}` in key order.
impl FieldValue for BTreeMap<String, String> {
    fn render_value(&self, out: &mut String) {
        out.push('{');
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out.push('}');
    }

    fn value_hash(&self) -> i32 {
        map_hash(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &dyn FieldValue) -> String {
        let mut out = String::new();
        value.render_value(&mut out);
        out
    }

    #[test]
    fn test_scalar_render() {
        assert_eq!(render(&"main".to_string()), "main");
        assert_eq!(render(&true), "true");
        assert_eq!(render(&42_i32), "42");
        let t = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(render(&t), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_millis_precision_truncates() {
        let t = DateTime::<Utc>::from_timestamp(1_700_000_000, 999_999).unwrap();
        assert_eq!(millis_precision(t), DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap());
        let t = DateTime::<Utc>::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(millis_precision(t), t);
    }

    #[test]
    fn test_sequence_render() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(render(&empty), "[]");
        assert_eq!(render(&vec!["a".to_string(), "b".to_string()]), "[a, b]");
    }

    #[test]
    fn test_map_render() {
        let map: BTreeMap<String, String> =
            [("stage".to_string(), "beta".to_string()), ("env".to_string(), "dev".to_string())].into();
        assert_eq!(render(&map), "{env=dev, stage=beta}");
    }

    #[test]
    fn test_sequence_hash_matches_list_hash() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(items.value_hash(), (31 + 97) * 31 + 98);
        assert_eq!(Vec::<String>::new().value_hash(), 1);
    }

    #[test]
    fn test_query_values() {
        assert_eq!(25_i32.query_values(), vec!["25".to_string()]);
        let keys = vec!["env".to_string(), "team".to_string()];
        assert_eq!(keys.query_values(), vec!["env".to_string(), "team".to_string()]);
        assert!(keys.is_sequence());
    }
}
