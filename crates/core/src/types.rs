//! Shared type aliases.

/// UTC timestamp used across all entities, serialized as RFC 3339.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
