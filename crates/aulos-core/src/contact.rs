#![forbid(unsafe_code)]

use std::fmt;

use crate::{CoreError, CoreResult};

/// Correlation id of one extraction request.
///
/// Used for the output artifact name and for result reporting, so it must be
/// non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::EmptyContactId);
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty() {
        let id = ContactId::new("b5b7a8e2-0001").unwrap();
        assert_eq!(id.as_str(), "b5b7a8e2-0001");
        assert_eq!(id.to_string(), "b5b7a8e2-0001");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(ContactId::new("").is_err());
        assert!(ContactId::new("   ").is_err());
    }
}
