//! Table numbers and table locks.
//!
//! # Actor Framework
//! [`TableLock`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//! The table number is the key: a lock exists while the table is taken and is
//! removed on release.

use crate::table_actor::TableError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A table number. Never empty; surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableId(String);

impl TableId {
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TableError::TableRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TableId {
    type Error = TableError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<TableId> for String {
    fn from(id: TableId) -> Self {
        id.0
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLock {
    pub table: TableId,
    /// When the lock was taken. Nothing expires locks yet.
    pub locked_at: DateTime<Utc>,
}

/// Payload for locking a table.
#[derive(Debug, Clone)]
pub struct TableLockCreate {
    pub table: TableId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id = TableId::parse("  T3 ").unwrap();
        assert_eq!(id.as_str(), "T3");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(TableId::parse("   "), Err(TableError::TableRequired));
        assert_eq!(TableId::parse(""), Err(TableError::TableRequired));
    }

    #[test]
    fn test_deserialize_validates() {
        let id: TableId = serde_json::from_str("\" 12 \"").unwrap();
        assert_eq!(id.to_string(), "12");
        assert!(serde_json::from_str::<TableId>("\"\"").is_err());
    }
}
