//! Strongly-typed record name used as the identity of inventory records.

use core::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Name of an inventory record.
///
/// The name doubles as the record's identity: it is fixed at construction
/// and never changes afterwards. Blank names are rejected up front so the
/// rest of the domain never has to re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordName(String);

impl RecordName {
    /// Validate and wrap a raw name.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_names() {
        let name = RecordName::new("Book").unwrap();
        assert_eq!(name.as_str(), "Book");
        assert_eq!(name.to_string(), "Book");
    }

    #[test]
    fn rejects_empty_name() {
        let err = RecordName::new("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = RecordName::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn parses_from_str() {
        let name: RecordName = "Book".parse().unwrap();
        assert_eq!(name.as_str(), "Book");
    }
}
