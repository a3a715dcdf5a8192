#![forbid(unsafe_code)]

use std::collections::BTreeMap;

/// Routing decision for one record, taken from its processing flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Flag `"1"`: extract and store.
    Process,
    /// Flag `"0"`: a previous run already handled this recording.
    AlreadyProcessed,
    /// Any other value, or no flag at all.
    InvalidFlag,
}

pub(crate) fn route(attributes: &BTreeMap<String, String>, flag_attribute: &str) -> Route {
    match attributes.get(flag_attribute).map(String::as_str) {
        Some("1") => Route::Process,
        Some("0") => Route::AlreadyProcessed,
        _ => Route::InvalidFlag,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::process("1", Route::Process)]
    #[case::already_done("0", Route::AlreadyProcessed)]
    #[case::unknown_value("99", Route::InvalidFlag)]
    #[case::empty_value("", Route::InvalidFlag)]
    #[test]
    fn routes_on_flag_value(#[case] value: &str, #[case] expected: Route) {
        let mut attributes = BTreeMap::new();
        attributes.insert("vm_flag".to_string(), value.to_string());
        assert_eq!(route(&attributes, "vm_flag"), expected);
    }

    #[test]
    fn absent_flag_is_invalid() {
        assert_eq!(route(&BTreeMap::new(), "vm_flag"), Route::InvalidFlag);
    }
}
