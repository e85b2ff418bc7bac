//! Functional tests for the contract between an editor and its host.
//!
//! The host owns the tag list and value map and hands the engine a fresh
//! snapshot on every interaction. These tests pin down the promises the
//! engine makes in return:
//! - events carry complete replacements, never deltas
//! - snapshots passed in are never modified
//! - ids the vocabulary does not know are kept in every outgoing list
//! - tag changes and value commits are independent channels

use pretty_assertions::assert_eq;
use tagset_engine::prelude::*;
use tagset_test_utils::{tags, values, RecordingHost};

#[test]
fn unknown_ids_survive_selection_changes() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::new(TagSnapshot::with_tags(["retired_tag", "healthy"]));

    let view = editor.view(&host.snapshot);
    assert_eq!(view.chips.len(), 1);

    host.interact(&mut editor, Interaction::select("athlete"));
    assert_eq!(host.snapshot.tags, tags(&["retired_tag", "healthy", "athlete"]));

    host.interact(&mut editor, Interaction::RemoveLast);
    host.interact(&mut editor, Interaction::deselect("healthy"));
    assert_eq!(host.snapshot.tags, tags(&["retired_tag"]));

    host.interact(&mut editor, Interaction::select("tremor"));
    host.interact(&mut editor, Interaction::Clear);
    assert_eq!(host.snapshot.tags, tags(&["retired_tag"]));
}

#[test]
fn host_removes_unknown_ids_explicitly() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::new(TagSnapshot::with_tags(["retired_tag"]));

    host.interact(&mut editor, Interaction::deselect("retired_tag"));
    assert!(host.snapshot.tags.is_empty());
}

#[test]
fn engine_never_mutates_the_snapshot() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let snapshot = TagSnapshot::with_tags(["age"]).with_value("age", 20.0);
    let before = snapshot.clone();

    editor.handle(&snapshot, Interaction::select("healthy"));
    editor.handle(&snapshot, Interaction::edit_value("age", "70"));
    let event = editor.handle(&snapshot, Interaction::commit_value("age"));

    assert_eq!(snapshot, before);
    assert_eq!(event, Some(TagEvent::TagValueChanged(values(&[("age", 70.0)]))));
}

#[test]
fn value_commit_replaces_whole_map() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::new(
        TagSnapshot::with_tags(["age"])
            .with_value("age", 20.0)
            .with_value("loaded_walking", 12.5),
    );

    host.enter_value(&mut editor, "age", "33");

    assert_eq!(
        host.last_event(),
        Some(&TagEvent::TagValueChanged(values(&[("age", 33.0), ("loaded_walking", 12.5)])))
    );
}

#[test]
fn deselecting_mid_edit_emits_only_the_tag_change() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::new(TagSnapshot::with_tags(["age"]).with_value("age", 20.0));

    host.interact(&mut editor, Interaction::edit_value("age", "55"));
    host.interact(&mut editor, Interaction::deselect("age"));
    host.interact(&mut editor, Interaction::commit_value("age"));

    assert_eq!(host.events, vec![TagEvent::TagsChanged(vec![])]);
    assert_eq!(host.snapshot.value("age"), Some(20.0));
}

#[test]
fn reselected_tag_starts_idle() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::new(TagSnapshot::with_tags(["age"]));

    host.interact(&mut editor, Interaction::edit_value("age", "55"));
    host.interact(&mut editor, Interaction::deselect("age"));
    host.interact(&mut editor, Interaction::select("age"));

    assert!(!editor.is_editing("age"));
    host.interact(&mut editor, Interaction::commit_value("age"));
    assert_eq!(host.events.len(), 2);
}

#[test]
fn unparsable_commit_keeps_previous_value() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::new(TagSnapshot::with_tags(["age"]).with_value("age", 37.0));

    host.enter_value(&mut editor, "age", "thirty");

    assert_eq!(host.snapshot.value("age"), Some(37.0));
}

#[test]
fn focus_and_blur_pass_through() {
    let mut editor = TagEditor::new(EditorSettings::new().with_read_only(true));
    let mut host = RecordingHost::default();

    host.interact(&mut editor, Interaction::Focus);
    host.interact(&mut editor, Interaction::select("healthy"));
    host.interact(&mut editor, Interaction::Blur);

    assert_eq!(host.focus_changes, vec![true, false]);
    assert!(host.events.is_empty());
}

#[test]
fn selection_order_follows_interaction_not_taxonomy() {
    let mut editor = TagEditor::new(EditorSettings::new());
    let mut host = RecordingHost::default();

    for id in ["athlete", "tremor", "age"] {
        host.interact(&mut editor, Interaction::select(id));
    }

    assert_eq!(host.snapshot.tags, tags(&["athlete", "tremor", "age"]));
    let chips: Vec<&str> = editor.view(&host.snapshot).chips.iter().map(|chip| chip.id).collect();
    assert_eq!(chips, vec!["athlete", "tremor", "age"]);
}
