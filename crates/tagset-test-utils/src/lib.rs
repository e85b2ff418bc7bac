//! Testing utilities for the Tagset workspace
//!
//! Shared fixtures, a recording host, and snapshot helpers.

#![allow(missing_docs)]

use tagset_engine::{Interaction, TagEditor, TagEvent, TagHost, TagSnapshot, TagValues};
use tagset_taxonomy::{NumericSpec, TagOption};

/// A header with exactly four selectable children, plus a numeric leaf
pub fn sample_forest() -> Vec<TagOption> {
    vec![
        TagOption::group(
            "conditions",
            "Conditions",
            vec![
                TagOption::header(
                    "stroke",
                    "Stroke",
                    vec![
                        TagOption::leaf("left", "Left"),
                        TagOption::leaf("right", "Right"),
                        TagOption::leaf("both", "Both"),
                        TagOption::leaf("unknown_side", "Unknown Side"),
                    ],
                )
                .non_selectable(),
                TagOption::leaf("speed", "Speed").with_numeric(NumericSpec::new("m/s").with_min(0.0)),
            ],
        ),
        TagOption::leaf("athlete", "Athlete"),
    ]
}

pub fn tags(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

pub fn values(entries: &[(&str, f64)]) -> TagValues {
    entries.iter().map(|(id, value)| ((*id).to_string(), *value)).collect()
}

/// Host that records every callback and persists events into its snapshot
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub snapshot: TagSnapshot,
    pub events: Vec<TagEvent>,
    pub focus_changes: Vec<bool>,
}

impl RecordingHost {
    pub fn new(snapshot: TagSnapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    /// Dispatch an interaction against the host's current snapshot
    pub fn interact(&mut self, editor: &mut TagEditor, interaction: Interaction) {
        let snapshot = self.snapshot.clone();
        editor.dispatch(self, &snapshot, interaction);
    }

    /// Type a value and press Enter
    pub fn enter_value(&mut self, editor: &mut TagEditor, id: &str, raw: &str) {
        self.interact(editor, Interaction::edit_value(id, raw));
        self.interact(editor, Interaction::enter(id));
    }

    pub fn last_event(&self) -> Option<&TagEvent> {
        self.events.last()
    }
}

impl TagHost for RecordingHost {
    fn tags_changed(&mut self, tags: Vec<String>) {
        let event = TagEvent::TagsChanged(tags);
        event.apply_to(&mut self.snapshot);
        self.events.push(event);
    }

    fn tag_values_changed(&mut self, values: TagValues) {
        let event = TagEvent::TagValueChanged(values);
        event.apply_to(&mut self.snapshot);
        self.events.push(event);
    }

    fn focused(&mut self) {
        self.focus_changes.push(true);
    }

    fn blurred(&mut self) {
        self.focus_changes.push(false);
    }
}
