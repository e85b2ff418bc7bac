//! Host-owned state snapshots
//!
//! The host owns the tag list and the value map. The engine reads them as
//! immutable snapshots and answers with freshly built replacements.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Numeric values by tag id
///
/// Keeps insertion order so emitted maps read the way the host wrote them.
pub type TagValues = IndexMap<String, f64>;

/// One render's worth of host state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSnapshot {
    /// Selected tag ids in interaction order; may contain unknown ids
    #[serde(default)]
    pub tags: Vec<String>,

    /// Committed numeric values; entries may outlive their tag
    #[serde(default)]
    pub tag_values: TagValues,
}

impl TagSnapshot {
    /// Create from a tag list and value map
    #[inline]
    #[must_use]
    pub fn new(tags: Vec<String>, tag_values: TagValues) -> Self {
        Self { tags, tag_values }
    }

    /// Snapshot with the given tags and no values
    #[must_use]
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tags.into_iter().map(Into::into).collect(), TagValues::new())
    }

    /// Add a committed value
    #[inline]
    #[must_use]
    pub fn with_value(mut self, id: impl Into<String>, value: f64) -> Self {
        self.tag_values.insert(id.into(), value);
        self
    }

    /// Committed value for a tag, if any
    #[inline]
    #[must_use]
    pub fn value(&self, id: &str) -> Option<f64> {
        self.tag_values.get(id).copied()
    }

    /// Value to display for a tag; absent entries show as zero
    #[inline]
    #[must_use]
    pub fn display_value(&self, id: &str) -> f64 {
        self.value(id).unwrap_or(0.0)
    }

    /// Whether the tag list contains this id
    #[inline]
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.tags.iter().any(|tag| tag == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_defaults_to_zero() {
        let snapshot = TagSnapshot::with_tags(["age"]);

        assert_eq!(snapshot.value("age"), None);
        assert_eq!(snapshot.display_value("age"), 0.0);
    }

    #[test]
    fn display_value_reads_stale_entries() {
        let snapshot = TagSnapshot::with_tags(Vec::<String>::new()).with_value("age", 40.0);

        assert!(!snapshot.is_selected("age"));
        assert_eq!(snapshot.display_value("age"), 40.0);
    }

    #[test]
    fn deserializes_host_json() {
        let json = r#"{ "tags": ["age", "healthy"], "tagValues": { "age": 25 } }"#;
        let snapshot: TagSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.tags, ["age", "healthy"]);
        assert_eq!(snapshot.value("age"), Some(25.0));
    }
}
