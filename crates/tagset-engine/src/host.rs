//! Host integration surface
//!
//! The host owns persistence. It receives full replacements through
//! [`TagHost`] and hands the next snapshot back on the following
//! interaction.

use crate::event::TagEvent;
use crate::snapshot::TagValues;

/// Receiver for editor events
///
/// Focus and blur notifications are pass-through and default to no-ops.
#[cfg_attr(test, mockall::automock)]
pub trait TagHost {
    /// The tag list was replaced
    fn tags_changed(&mut self, tags: Vec<String>);

    /// The value map was replaced
    fn tag_values_changed(&mut self, values: TagValues);

    /// The control gained focus
    fn focused(&mut self) {}

    /// The control lost focus
    fn blurred(&mut self) {}
}

impl TagEvent {
    /// Hand the event to a host
    pub fn deliver<H: TagHost + ?Sized>(self, host: &mut H) {
        match self {
            Self::TagsChanged(tags) => host.tags_changed(tags),
            Self::TagValueChanged(values) => host.tag_values_changed(values),
        }
    }
}
