//! Selection model
//!
//! Resolves the host's tag list against a vocabulary and builds the
//! replacement lists and maps the engine emits. Every operation reads its
//! inputs and returns a fresh value; nothing is mutated in place.
//!
//! Ids with no match in the vocabulary are left out of the resolved display
//! set but carried through every outgoing list untouched.

use tagset_taxonomy::{FlatOption, FlatOptions};

use crate::snapshot::TagValues;

/// Pure operations over a host tag list
#[derive(Debug, Clone, Copy)]
pub struct SelectionModel<'v> {
    options: &'v FlatOptions,
}

impl<'v> SelectionModel<'v> {
    /// Model over a flattened vocabulary
    #[inline]
    #[must_use]
    pub fn new(options: &'v FlatOptions) -> Self {
        Self { options }
    }

    /// Options to display for the tag list, in tag-list order
    ///
    /// Unknown ids are skipped. Repeated ids resolve once per occurrence.
    #[must_use]
    pub fn resolve(&self, tags: &[String]) -> Vec<&'v FlatOption> {
        tags.iter().filter_map(|id| self.options.find(id)).collect()
    }

    /// Ids in the tag list with no match in the vocabulary
    #[must_use]
    pub fn unknown<'t>(&self, tags: &'t [String]) -> Vec<&'t str> {
        tags.iter()
            .filter(|id| !self.options.contains(id))
            .map(String::as_str)
            .collect()
    }

    /// Tag list with `id` appended
    ///
    /// Returns `None` when the id is unknown, not selectable, or already in
    /// the list.
    #[must_use]
    pub fn select(&self, tags: &[String], id: &str) -> Option<Vec<String>> {
        let option = self.options.find(id)?;
        if !option.is_selectable() || tags.iter().any(|tag| tag == id) {
            return None;
        }
        let mut next = tags.to_vec();
        next.push(option.id.clone());
        Some(next)
    }

    /// Tag list without any occurrence of `id`
    ///
    /// Returns `None` when the id is not in the list.
    #[must_use]
    pub fn deselect(&self, tags: &[String], id: &str) -> Option<Vec<String>> {
        if !tags.iter().any(|tag| tag == id) {
            return None;
        }
        Some(tags.iter().filter(|tag| *tag != id).cloned().collect())
    }

    /// Tag list without its last resolved entry
    ///
    /// Returns the removed id with the new list, or `None` when no entry
    /// resolves.
    #[must_use]
    pub fn remove_last(&self, tags: &[String]) -> Option<(String, Vec<String>)> {
        let position = tags.iter().rposition(|tag| self.options.contains(tag))?;
        let mut next = tags.to_vec();
        let removed = next.remove(position);
        Some((removed, next))
    }

    /// Tag list keeping only unknown ids
    ///
    /// Returns `None` when no entry resolves.
    #[must_use]
    pub fn clear(&self, tags: &[String]) -> Option<Vec<String>> {
        if !tags.iter().any(|tag| self.options.contains(tag)) {
            return None;
        }
        Some(
            tags.iter()
                .filter(|tag| !self.options.contains(tag))
                .cloned()
                .collect(),
        )
    }
}

/// Value map with `id` set to `value`
///
/// Every other entry, including entries for deselected tags, is kept.
#[must_use]
pub fn with_value(values: &TagValues, id: &str, value: f64) -> TagValues {
    let mut next = values.clone();
    next.insert(id.to_string(), value);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagset_taxonomy::{flatten, TagOption};

    fn options() -> FlatOptions {
        flatten(&[TagOption::group(
            "movement_types",
            "Movement Types",
            vec![
                TagOption::leaf("running", "Running"),
                TagOption::leaf("walking", "Walking"),
                TagOption::leaf("jump", "Jumping"),
            ],
        )])
    }

    fn tags(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_string()).collect()
    }

    #[test]
    fn resolve_keeps_tag_order_and_skips_unknown() {
        let options = options();
        let model = SelectionModel::new(&options);
        let resolved: Vec<&str> = model
            .resolve(&tags(&["jump", "legacy_tag", "running"]))
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();

        assert_eq!(resolved, vec!["jump", "running"]);
    }

    #[test]
    fn unknown_lists_unmatched_ids() {
        let options = options();
        let model = SelectionModel::new(&options);
        let list = tags(&["jump", "legacy_tag"]);

        assert_eq!(model.unknown(&list), vec!["legacy_tag"]);
    }

    #[test]
    fn select_appends_in_interaction_order() {
        let options = options();
        let model = SelectionModel::new(&options);

        let next = model.select(&tags(&["jump", "legacy_tag"]), "running").unwrap();
        assert_eq!(next, tags(&["jump", "legacy_tag", "running"]));
    }

    #[test]
    fn select_rejects_unknown_locked_and_repeated() {
        let options = options();
        let model = SelectionModel::new(&options);
        let list = tags(&["jump"]);

        assert_eq!(model.select(&list, "flying"), None);
        assert_eq!(model.select(&list, "movement_types"), None);
        assert_eq!(model.select(&list, "jump"), None);
    }

    #[test]
    fn deselect_preserves_unknown_ids() {
        let options = options();
        let model = SelectionModel::new(&options);

        let next = model.deselect(&tags(&["legacy_tag", "jump", "running"]), "jump").unwrap();
        assert_eq!(next, tags(&["legacy_tag", "running"]));
        assert_eq!(model.deselect(&next, "jump"), None);
    }

    #[test]
    fn remove_last_skips_trailing_unknown_ids() {
        let options = options();
        let model = SelectionModel::new(&options);

        let (removed, next) = model.remove_last(&tags(&["jump", "running", "legacy_tag"])).unwrap();
        assert_eq!(removed, "running");
        assert_eq!(next, tags(&["jump", "legacy_tag"]));
        assert_eq!(model.remove_last(&tags(&["legacy_tag"])), None);
    }

    #[test]
    fn clear_keeps_only_unknown_ids() {
        let options = options();
        let model = SelectionModel::new(&options);

        assert_eq!(model.clear(&tags(&["jump", "legacy_tag", "running"])), Some(tags(&["legacy_tag"])));
        assert_eq!(model.clear(&tags(&["legacy_tag"])), None);
    }

    #[test]
    fn with_value_replaces_one_entry() {
        let mut values = TagValues::new();
        values.insert("age".into(), 25.0);
        values.insert("stale".into(), 3.0);

        let next = with_value(&values, "age", 90.0);

        assert_eq!(next.get("age"), Some(&90.0));
        assert_eq!(next.get("stale"), Some(&3.0));
        assert_eq!(values.get("age"), Some(&25.0));
    }
}
