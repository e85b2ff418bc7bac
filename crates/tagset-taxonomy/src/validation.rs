//! Forest validation
//!
//! Checks the structural invariants vocabularies rely on: ids are
//! non-empty and unique across the whole forest, and numeric bounds are
//! finite and ordered.

use std::collections::HashSet;

use crate::error::TaxonomyError;
use crate::option::TagOption;

/// Validate a vocabulary forest
///
/// # Errors
/// Returns the first violation found in pre-order.
pub fn validate_forest(forest: &[TagOption]) -> Result<(), TaxonomyError> {
    let mut seen = HashSet::new();
    validate_nodes(forest, &mut seen)
}

fn validate_nodes<'a>(
    nodes: &'a [TagOption],
    seen: &mut HashSet<&'a str>,
) -> Result<(), TaxonomyError> {
    for node in nodes {
        if node.id.is_empty() {
            return Err(TaxonomyError::EmptyId {
                label: node.label.clone(),
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(TaxonomyError::DuplicateId {
                id: node.id.clone(),
            });
        }
        if let Some(spec) = &node.numeric {
            let bounds = [spec.min, spec.max];
            if bounds.iter().flatten().any(|bound| !bound.is_finite()) {
                return Err(TaxonomyError::NonFiniteBound {
                    id: node.id.clone(),
                });
            }
            if let (Some(min), Some(max)) = (spec.min, spec.max) {
                if min > max {
                    return Err(TaxonomyError::InvertedBounds {
                        id: node.id.clone(),
                        min,
                        max,
                    });
                }
            }
        }
        validate_nodes(&node.children, seen)?;
    }
    Ok(())
}

/// Total number of nodes in a forest, headers included
#[must_use]
pub fn count_nodes(forest: &[TagOption]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::NumericSpec;

    #[test]
    fn accepts_well_formed_forest() {
        let forest = vec![TagOption::group(
            "g",
            "G",
            vec![TagOption::leaf("age", "Age")
                .with_numeric(NumericSpec::new("years").with_bounds(10.0, 90.0))],
        )];

        assert!(validate_forest(&forest).is_ok());
        assert_eq!(count_nodes(&forest), 2);
    }

    #[test]
    fn rejects_duplicate_across_levels() {
        let forest = vec![
            TagOption::group("g", "G", vec![TagOption::leaf("x", "X")]),
            TagOption::leaf("x", "Other X"),
        ];

        assert_eq!(
            validate_forest(&forest),
            Err(TaxonomyError::DuplicateId { id: "x".into() })
        );
    }

    #[test]
    fn rejects_empty_id() {
        let forest = vec![TagOption::leaf("", "Nameless")];

        assert!(matches!(validate_forest(&forest), Err(TaxonomyError::EmptyId { .. })));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let forest = vec![TagOption::leaf("speed", "Speed")
            .with_numeric(NumericSpec::new("m/s").with_bounds(5.0, 1.0))];

        assert!(matches!(
            validate_forest(&forest),
            Err(TaxonomyError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bound() {
        let forest = vec![TagOption::leaf("speed", "Speed")
            .with_numeric(NumericSpec::new("m/s").with_max(f64::NAN))];

        assert!(matches!(
            validate_forest(&forest),
            Err(TaxonomyError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn count_empty_forest() {
        assert_eq!(count_nodes(&[]), 0);
    }
}
