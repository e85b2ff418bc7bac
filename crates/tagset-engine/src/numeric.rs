//! Numeric value binding
//!
//! Each selected tag that declares a [`NumericSpec`] gets a small
//! edit/commit state machine:
//!
//! ```text
//! Idle(value) --keystroke--> Editing(pending) --blur | Enter--> Idle(coerce(pending))
//! ```
//!
//! Keystrokes are accepted without validation. Coercion happens only on
//! commit: round first when the spec is integer-valued, then clamp to the
//! declared bounds.

use tagset_taxonomy::NumericSpec;

/// Round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`)
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Coerce a value into the spec: round, then clamp
///
/// Bounds are expressed in already-rounded units, so clamping follows
/// rounding.
///
/// # Example
/// ```
/// use tagset_engine::numeric::coerce;
/// use tagset_taxonomy::NumericSpec;
///
/// let age = NumericSpec::new("years").with_bounds(10.0, 90.0).integer();
/// assert_eq!(coerce(&age, 9.6), 10.0);
/// assert_eq!(coerce(&age, 95.2), 90.0);
/// assert_eq!(coerce(&age, 50.4), 50.0);
/// ```
#[must_use]
pub fn coerce(spec: &NumericSpec, value: f64) -> f64 {
    let mut value = if spec.integer { round_half_up(value) } else { value };
    if let Some(min) = spec.min {
        if value < min {
            value = min;
        }
    }
    if let Some(max) = spec.max {
        if value > max {
            value = max;
        }
    }
    value
}

/// Parse raw input text into a finite number
///
/// Surrounding whitespace is ignored. Empty text, garbage, `NaN`, and
/// infinities are all unparsable.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// State of a numeric binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BindingState {
    /// Showing the committed value
    Idle {
        /// Committed value, zero when the host has none
        value: f64,
    },

    /// Holding an uncommitted edit
    Editing {
        /// Parsed input; `None` while the input does not parse
        pending: Option<f64>,
        /// Host value when the edit began
        baseline: Option<f64>,
    },
}

/// Edit/commit state machine for one numeric tag
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBinding {
    spec: NumericSpec,
    state: BindingState,
}

impl NumericBinding {
    /// Start idle on the host's committed value
    #[must_use]
    pub fn new(spec: NumericSpec, committed: Option<f64>) -> Self {
        Self {
            spec,
            state: BindingState::Idle {
                value: committed.unwrap_or(0.0),
            },
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> BindingState {
        self.state
    }

    /// Declared spec
    #[inline]
    #[must_use]
    pub fn spec(&self) -> &NumericSpec {
        &self.spec
    }

    /// Whether an edit is in progress
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, BindingState::Editing { .. })
    }

    /// Value the input shows; `None` while an unparsable edit is pending
    #[inline]
    #[must_use]
    pub fn display_value(&self) -> Option<f64> {
        match self.state {
            BindingState::Idle { value } => Some(value),
            BindingState::Editing { pending, .. } => pending,
        }
    }

    /// Record the input's new text
    ///
    /// `committed` is the host's value for the tag; it becomes the
    /// fallback if this edit never parses.
    pub fn keystroke(&mut self, raw: &str, committed: Option<f64>) {
        let pending = parse_number(raw);
        self.state = match self.state {
            BindingState::Idle { .. } => BindingState::Editing {
                pending,
                baseline: committed,
            },
            BindingState::Editing { baseline, .. } => BindingState::Editing { pending, baseline },
        };
        tracing::trace!("Numeric edit pending {:?}", pending);
    }

    /// Commit the pending edit
    ///
    /// Returns the coerced value to publish, or `None` when no edit was in
    /// progress. An unparsable edit falls back to the value committed when
    /// the edit began, or zero.
    pub fn commit(&mut self) -> Option<f64> {
        let BindingState::Editing { pending, baseline } = self.state else {
            return None;
        };
        let raw = pending.or(baseline).unwrap_or(0.0);
        let value = coerce(&self.spec, raw);
        self.state = BindingState::Idle { value };
        Some(value)
    }

    /// Reconcile with the host's latest committed value
    ///
    /// An idle binding adopts the host value. An in-progress edit survives
    /// unless the host value moved away from the one the edit started from,
    /// in which case the edit is superseded.
    pub fn sync(&mut self, committed: Option<f64>) {
        match self.state {
            BindingState::Editing { baseline, .. } if baseline == committed => {}
            BindingState::Editing { .. } => {
                tracing::debug!("Numeric edit superseded by host value {:?}", committed);
                self.state = BindingState::Idle {
                    value: committed.unwrap_or(0.0),
                };
            }
            BindingState::Idle { .. } => {
                self.state = BindingState::Idle {
                    value: committed.unwrap_or(0.0),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age() -> NumericSpec {
        NumericSpec::new("years").with_bounds(10.0, 90.0).integer()
    }

    #[test]
    fn coerce_rounds_then_clamps() {
        assert_eq!(coerce(&age(), 9.6), 10.0);
        assert_eq!(coerce(&age(), 95.2), 90.0);
        assert_eq!(coerce(&age(), 50.4), 50.0);
        assert_eq!(coerce(&age(), 9.4), 10.0);
        assert_eq!(coerce(&age(), 89.5), 90.0);
    }

    #[test]
    fn coerce_leaves_fractional_unbounded_values() {
        let speed = NumericSpec::new("m/s");
        assert_eq!(coerce(&speed, 1.25), 1.25);
        assert_eq!(coerce(&speed, -3.5), -3.5);
    }

    #[test]
    fn coerce_with_single_bound() {
        let load = NumericSpec::new("kg").with_min(0.0);
        assert_eq!(coerce(&load, -2.0), 0.0);
        assert_eq!(coerce(&load, 1e6), 1e6);
    }

    #[test]
    fn round_half_up_breaks_ties_upward() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-0.2), 0.0);
    }

    #[test]
    fn parse_number_rejects_non_finite() {
        assert_eq!(parse_number(" 25 "), Some(25.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn idle_shows_committed_or_zero() {
        assert_eq!(NumericBinding::new(age(), None).display_value(), Some(0.0));
        assert_eq!(NumericBinding::new(age(), Some(40.0)).display_value(), Some(40.0));
    }

    #[test]
    fn editing_accepts_any_number_until_commit() {
        let mut binding = NumericBinding::new(age(), None);
        binding.keystroke("120", None);

        assert!(binding.is_editing());
        assert_eq!(binding.display_value(), Some(120.0));
        assert_eq!(binding.commit(), Some(90.0));
        assert_eq!(binding.state(), BindingState::Idle { value: 90.0 });
    }

    #[test]
    fn commit_without_edit_publishes_nothing() {
        let mut binding = NumericBinding::new(age(), Some(30.0));
        assert_eq!(binding.commit(), None);
    }

    #[test]
    fn unparsable_commit_falls_back_to_committed_value() {
        let mut binding = NumericBinding::new(age(), Some(42.0));
        binding.keystroke("4", Some(42.0));
        binding.keystroke("", Some(42.0));

        assert_eq!(binding.display_value(), None);
        assert_eq!(binding.commit(), Some(42.0));
    }

    #[test]
    fn unparsable_commit_without_history_falls_back_to_zero() {
        let mut binding = NumericBinding::new(NumericSpec::new("deg"), None);
        binding.keystroke("-", None);

        assert_eq!(binding.commit(), Some(0.0));
    }

    #[test]
    fn sync_keeps_edit_while_host_is_unchanged() {
        let mut binding = NumericBinding::new(age(), Some(20.0));
        binding.keystroke("33", Some(20.0));
        binding.sync(Some(20.0));

        assert_eq!(binding.display_value(), Some(33.0));
    }

    #[test]
    fn sync_supersedes_edit_when_host_moves() {
        let mut binding = NumericBinding::new(age(), Some(20.0));
        binding.keystroke("33", Some(20.0));
        binding.sync(Some(55.0));

        assert!(!binding.is_editing());
        assert_eq!(binding.display_value(), Some(55.0));
    }

    #[test]
    fn sync_updates_idle_value() {
        let mut binding = NumericBinding::new(age(), Some(20.0));
        binding.sync(None);
        assert_eq!(binding.display_value(), Some(0.0));
    }
}
