// Copyright (c) 2026 - Stratus Labs
//! Key Lookup Options Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Options describing a key lookup by alias
///
/// This is a shape-only descriptor consumed by an external lookup mechanism.
/// The alias is expected to follow the `alias/<name>` pattern; that pattern is
/// validated by the consumer, not here.
///
/// # Examples
///
/// ```rust
/// use cloud_infrastructure_bindings::domain::KeyLookupOptions;
///
/// let options = KeyLookupOptions::new("alias/deployment-key");
/// assert_eq!(options.alias_name, "alias/deployment-key");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyLookupOptions {
    /// Alias the key is looked up by, in `alias/<name>` form
    pub alias_name: String,
}

impl KeyLookupOptions {
    /// Create lookup options for the given alias
    pub fn new(alias_name: impl Into<String>) -> Self {
        Self {
            alias_name: alias_name.into(),
        }
    }
}

impl fmt::Display for KeyLookupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup_options_construction() {
        let options = KeyLookupOptions::new("alias/my-key");
        assert_eq!(options.alias_name, "alias/my-key");
        assert_eq!(format!("{}", options), "alias/my-key");
    }

    #[test]
    fn test_key_lookup_options_serialization() {
        let options = KeyLookupOptions::new("alias/my-key");
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"aliasName":"alias/my-key"}"#);

        let parsed: KeyLookupOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }
}
