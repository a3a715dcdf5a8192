#![forbid(unsafe_code)]

use std::collections::BTreeMap;

/// Build the provenance tag string stored alongside an artifact.
///
/// Attributes whose keys carry the prefix are joined as `key=value` pairs
/// with `&` separators and no trailing separator. Order is deterministic
/// (sorted by key). Returns `None` when no attribute matches.
#[must_use]
pub fn build_tag_string(attributes: &BTreeMap<String, String>, prefix: &str) -> Option<String> {
    let joined = attributes
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn joins_prefixed_attributes_without_trailing_separator() {
        let attrs = attributes(&[
            ("vm_flag", "1"),
            ("vm_lang", "en"),
            ("queue", "support"),
        ]);
        assert_eq!(
            build_tag_string(&attrs, "vm_"),
            Some("vm_flag=1&vm_lang=en".to_string())
        );
    }

    #[test]
    fn no_matching_keys_yields_none() {
        let attrs = attributes(&[("queue", "support")]);
        assert_eq!(build_tag_string(&attrs, "vm_"), None);
        assert_eq!(build_tag_string(&BTreeMap::new(), "vm_"), None);
    }

    #[test]
    fn single_pair_has_no_separator() {
        let attrs = attributes(&[("vm_flag", "1")]);
        assert_eq!(build_tag_string(&attrs, "vm_"), Some("vm_flag=1".to_string()));
    }
}
