//! Plain-text rendering of offerable options

use std::fmt::Write;

use tagset_engine::SelectionSet;
use tagset_taxonomy::FlatOption;

/// One line per option, indented two spaces per level
///
/// Selected rows are flush and marked with `*`.
pub(crate) fn render_tree<'a>(
    options: impl IntoIterator<Item = &'a FlatOption>,
    selected: &SelectionSet<'_>,
) -> String {
    let mut out = String::new();
    for option in options {
        if selected.contains(&option.id) {
            let _ = writeln!(out, "{} *", describe(option));
        } else {
            let _ = writeln!(out, "{}{}", "  ".repeat(option.level), describe(option));
        }
    }
    out
}

fn describe(option: &FlatOption) -> String {
    let mut line = if option.label == option.id {
        option.id.clone()
    } else {
        format!("{} ({})", option.label, option.id)
    };
    if let Some(spec) = &option.numeric {
        let bound = |value: Option<f64>| value.map_or_else(String::new, |v| v.to_string());
        let _ = write!(line, " [{}", spec.units);
        if spec.is_bounded() {
            let _ = write!(line, " {}..{}", bound(spec.min), bound(spec.max));
        }
        if spec.integer {
            line.push_str(" int");
        }
        line.push(']');
    }
    if option.is_non_selectable {
        line.push_str(" -");
    } else if option.is_header {
        line.push_str(" +");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagset_taxonomy::{flatten, FlatOptions, NumericSpec, TagOption};

    #[test]
    fn renders_levels_and_markers() {
        let forest = vec![TagOption::group(
            "demographics",
            "Demographics",
            vec![TagOption::leaf("age", "Age")
                .with_numeric(NumericSpec::new("years").with_bounds(10.0, 90.0).integer())],
        )];

        assert_eq!(
            render_tree(&flatten(&forest), &SelectionSet::default()),
            "Demographics (demographics) -\n  Age (age) [years 10..90 int]\n"
        );
    }

    #[test]
    fn custom_ids_render_once() {
        let options = FlatOptions::from_ids(["red", "green"]);

        assert_eq!(render_tree(&options, &SelectionSet::default()), "red\ngreen\n");
    }

    #[test]
    fn open_bound_renders_empty_side() {
        let forest = vec![TagOption::header(
            "walking",
            "Walking",
            vec![TagOption::leaf("speed", "Speed").with_numeric(NumericSpec::new("m/s").with_min(0.0))],
        )];

        let options = flatten(&forest);

        assert_eq!(
            render_tree(&options, &SelectionSet::default()),
            "Walking (walking) +\n  Speed (speed) [m/s 0..]\n"
        );
    }

    #[test]
    fn selected_rows_render_flush_and_marked() {
        let forest = vec![TagOption::header(
            "parkinsons",
            "Parkinsons",
            vec![TagOption::leaf("tremor", "Tremor")],
        )];
        let options = flatten(&forest);
        let selected: SelectionSet<'_> = ["parkinsons"].into_iter().collect();

        assert_eq!(
            render_tree(&options, &selected),
            "Parkinsons (parkinsons) + *\n  Tremor (tremor)\n"
        );
    }
}
