//! Record identifiers.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a Concrete record.
///
/// Every record built during a conversion gets a freshly generated (v4) identifier,
/// and references between records go through these identifiers only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(String);

impl Uuid {
    /// Mint a new, globally unique identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Uuid;

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<Uuid> = (0..1000).map(|_| Uuid::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn generated_ids_are_valid_uuids() {
        let id = Uuid::generate();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = Uuid::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
