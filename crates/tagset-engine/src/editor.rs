//! Tag editor
//!
//! [`TagEditor`] ties the pieces together for one host control. The host
//! passes its current [`TagSnapshot`] with every call; the editor answers
//! with a render model or with at most one [`TagEvent`] carrying a full
//! replacement. The only state the editor keeps is the set of numeric edits
//! still in progress.

use std::collections::HashMap;

use tagset_taxonomy::{FlatOption, NumericSpec};

use crate::event::{Interaction, NumberKey, TagEvent};
use crate::host::TagHost;
use crate::numeric::NumericBinding;
use crate::selection::{with_value, SelectionModel};
use crate::settings::EditorSettings;
use crate::snapshot::TagSnapshot;
use crate::view::{
    ChipView, ControlStyle, EditorView, NumberField, OptionRow, SearchOutcome, NO_MATCHES_NOTICE,
};
use crate::visibility::{offerable, SelectionSet};
use crate::vocabulary::Vocabulary;

/// Editor for one tag list
#[derive(Debug, Clone)]
pub struct TagEditor {
    vocabulary: Vocabulary,
    settings: EditorSettings,
    edits: HashMap<String, NumericBinding>,
}

impl TagEditor {
    /// Create an editor, resolving its vocabulary once
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        let vocabulary = Vocabulary::resolve(settings.vocabulary.clone());
        Self {
            vocabulary,
            settings,
            edits: HashMap::new(),
        }
    }

    /// Resolved vocabulary
    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Construction settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Whether an uncommitted numeric edit exists for the tag
    #[inline]
    #[must_use]
    pub fn is_editing(&self, id: &str) -> bool {
        self.edits.get(id).is_some_and(NumericBinding::is_editing)
    }

    /// Selection model over this editor's vocabulary
    #[inline]
    #[must_use]
    pub fn selection(&self) -> SelectionModel<'_> {
        SelectionModel::new(self.vocabulary.options())
    }

    /// Build the render model for a snapshot
    #[must_use]
    pub fn view(&self, snapshot: &TagSnapshot) -> EditorView<'_> {
        let chips = self
            .selection()
            .resolve(&snapshot.tags)
            .into_iter()
            .map(|option| self.chip(option, snapshot))
            .collect();
        EditorView {
            chips,
            options: self.rows(snapshot),
            control: ControlStyle::from_flags(self.settings.error, self.settings.read_only),
            interactive: !self.settings.read_only,
        }
    }

    /// Offerable rows matching a search query
    ///
    /// Matching is a case-insensitive substring test on label and id. A
    /// blank query matches every offerable row.
    #[must_use]
    pub fn search(&self, snapshot: &TagSnapshot, query: &str) -> SearchOutcome<'_> {
        let needle = query.trim().to_lowercase();
        let rows: Vec<OptionRow<'_>> = self
            .rows(snapshot)
            .into_iter()
            .filter(|row| needle.is_empty() || row.matches(&needle))
            .collect();
        if rows.is_empty() {
            tracing::debug!("Search {:?} matched no offerable tags", query);
            SearchOutcome::NoMatches {
                notice: NO_MATCHES_NOTICE,
            }
        } else {
            SearchOutcome::Matches { rows }
        }
    }

    /// Apply an interaction to a snapshot
    ///
    /// Returns the event the host should persist, or `None` when the
    /// interaction changes nothing the host owns. Interactions the editor
    /// does not accept are ignored rather than rejected.
    pub fn handle(&mut self, snapshot: &TagSnapshot, interaction: Interaction) -> Option<TagEvent> {
        self.reconcile(snapshot);
        if self.settings.read_only && interaction.is_mutation() {
            tracing::trace!("Read-only editor ignored {:?}", interaction);
            return None;
        }

        let event = match interaction {
            Interaction::Select { id } => {
                self.selection().select(&snapshot.tags, &id).map(TagEvent::TagsChanged)
            }
            Interaction::Deselect { id } => {
                let next = self.selection().deselect(&snapshot.tags, &id);
                if next.is_some() {
                    self.discard_edit(&id);
                }
                next.map(TagEvent::TagsChanged)
            }
            Interaction::RemoveLast => {
                let outcome = self.selection().remove_last(&snapshot.tags);
                outcome.map(|(removed, next)| {
                    self.discard_edit(&removed);
                    TagEvent::TagsChanged(next)
                })
            }
            Interaction::Clear => {
                let next = self.selection().clear(&snapshot.tags);
                if next.is_some() {
                    self.edits.clear();
                }
                next.map(TagEvent::TagsChanged)
            }
            Interaction::EditValue { id, raw } => {
                self.edit(snapshot, id, &raw);
                None
            }
            Interaction::CommitValue { id }
            | Interaction::KeyPress {
                id,
                key: NumberKey::Enter,
            } => self.commit(snapshot, &id),
            Interaction::KeyPress { .. } | Interaction::Focus | Interaction::Blur => None,
        };

        match &event {
            Some(TagEvent::TagsChanged(tags)) => tracing::debug!("Emitting tags-changed with {} tags", tags.len()),
            Some(TagEvent::TagValueChanged(values)) => {
                tracing::debug!("Emitting tag-value-changed with {} entries", values.len());
            }
            None => {}
        }
        event
    }

    /// Apply an interaction and deliver the outcome to a host
    ///
    /// Focus and blur are passed through to the host's notification hooks.
    pub fn dispatch<H: TagHost + ?Sized>(
        &mut self,
        host: &mut H,
        snapshot: &TagSnapshot,
        interaction: Interaction,
    ) {
        match interaction {
            Interaction::Focus => host.focused(),
            Interaction::Blur => host.blurred(),
            _ => {}
        }
        if let Some(event) = self.handle(snapshot, interaction) {
            event.deliver(host);
        }
    }

    fn rows(&self, snapshot: &TagSnapshot) -> Vec<OptionRow<'_>> {
        let selected = SelectionSet::from_tags(&snapshot.tags);
        offerable(self.vocabulary.options(), &selected)
            .into_iter()
            .map(|(_, option)| OptionRow::new(option, selected.contains(&option.id)))
            .collect()
    }

    fn chip<'a>(&'a self, option: &'a FlatOption, snapshot: &TagSnapshot) -> ChipView<'a> {
        let number = option
            .numeric
            .as_ref()
            .filter(|_| !self.settings.hide_numbers)
            .map(|spec| {
                let committed = snapshot.value(&option.id);
                let pending = self
                    .edits
                    .get(&option.id)
                    .map(|binding| {
                        let mut binding = binding.clone();
                        binding.sync(committed);
                        binding
                    })
                    .filter(NumericBinding::is_editing);
                NumberField {
                    units: &spec.units,
                    value: match &pending {
                        Some(binding) => binding.display_value(),
                        None => Some(snapshot.display_value(&option.id)),
                    },
                    editing: pending.is_some(),
                    editable: !self.settings.read_only,
                }
            });
        ChipView {
            id: &option.id,
            label: &option.label,
            number,
        }
    }

    /// Numeric spec of a tag that currently shows an editable input
    fn numeric_target(&self, snapshot: &TagSnapshot, id: &str) -> Option<NumericSpec> {
        if self.settings.hide_numbers || !snapshot.is_selected(id) {
            return None;
        }
        self.vocabulary.find(id)?.numeric.clone()
    }

    fn edit(&mut self, snapshot: &TagSnapshot, id: String, raw: &str) {
        let Some(spec) = self.numeric_target(snapshot, &id) else {
            tracing::trace!("Ignored numeric edit for {}", id);
            return;
        };
        let committed = snapshot.value(&id);
        self.edits
            .entry(id)
            .or_insert_with(|| NumericBinding::new(spec, committed))
            .keystroke(raw, committed);
    }

    fn commit(&mut self, snapshot: &TagSnapshot, id: &str) -> Option<TagEvent> {
        let value = self.edits.remove(id)?.commit()?;
        Some(TagEvent::TagValueChanged(with_value(&snapshot.tag_values, id, value)))
    }

    fn discard_edit(&mut self, id: &str) {
        if self.edits.remove(id).is_some() {
            tracing::debug!("Discarded uncommitted edit for {}", id);
        }
    }

    /// Drop edits whose tag left the snapshot and sync the rest
    fn reconcile(&mut self, snapshot: &TagSnapshot) {
        let hide_numbers = self.settings.hide_numbers;
        self.edits.retain(|id, binding| {
            if hide_numbers || !snapshot.is_selected(id) {
                return false;
            }
            binding.sync(snapshot.value(id));
            binding.is_editing()
        });
    }
}
