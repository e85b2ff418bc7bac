//! Tagset Engine
//!
//! Tag selection and annotation over controlled vocabularies.
//!
//! # Overview
//!
//! The engine provides:
//! - **Vocabulary**: a built-in taxonomy or flat id list, resolved once into
//!   a flattened sequence
//! - **Visibility**: which options are still worth offering for a selection
//! - **NumericBinding**: edit/commit state machine with round-then-clamp
//! - **SelectionModel**: pure transformations of the host's tag list
//! - **TagEditor**: the host-facing surface emitting full replacements
//!
//! The host owns the tag list and value map. Each call receives a
//! [`TagSnapshot`] and answers with a fresh list or map; nothing the host
//! passes in is mutated.
//!
//! # Example
//!
//! ```rust
//! use tagset_engine::{EditorSettings, Interaction, TagEditor, TagEvent, TagSnapshot};
//!
//! let mut editor = TagEditor::new(EditorSettings::new());
//! let mut snapshot = TagSnapshot::default();
//!
//! // Select a numeric tag
//! let event = editor.handle(&snapshot, Interaction::select("age")).unwrap();
//! event.apply_to(&mut snapshot);
//!
//! // Type a value, then commit it
//! editor.handle(&snapshot, Interaction::edit_value("age", "120"));
//! let event = editor.handle(&snapshot, Interaction::commit_value("age")).unwrap();
//!
//! match event {
//!     TagEvent::TagValueChanged(values) => assert_eq!(values["age"], 90.0),
//!     TagEvent::TagsChanged(_) => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

pub mod editor;
pub mod error;
pub mod event;
pub mod host;
pub mod numeric;
pub mod selection;
pub mod settings;
pub mod snapshot;
pub mod view;
pub mod visibility;
pub mod vocabulary;

// Re-exports
pub use editor::TagEditor;
pub use error::ConfigError;
pub use event::{Interaction, NumberKey, TagEvent};
pub use host::TagHost;
pub use numeric::{coerce, BindingState, NumericBinding};
pub use selection::SelectionModel;
pub use settings::EditorSettings;
pub use snapshot::{TagSnapshot, TagValues};
pub use view::{ChipView, ControlStyle, EditorView, NumberField, OptionRow, SearchOutcome};
pub use visibility::{is_visible, offerable, visibility_mask, SelectionSet};
pub use vocabulary::{Vocabulary, VocabularySource};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving an editor
    pub use crate::{
        EditorSettings, Interaction, TagEditor, TagEvent, TagHost, TagSnapshot, TagValues,
        Vocabulary, VocabularySource,
    };
    pub use tagset_taxonomy::TaxonomyKind;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
