//! Scripted interactions
//!
//! `apply --action` takes a small textual form of an interaction so a whole
//! editing session can be replayed from the shell:
//!
//! | form           | interactions                  |
//! |----------------|-------------------------------|
//! | `select:ID`    | select                        |
//! | `deselect:ID`  | deselect                      |
//! | `remove-last`  | remove last                   |
//! | `clear`        | clear                         |
//! | `edit:ID=RAW`  | edit value                    |
//! | `commit:ID`    | commit value (blur the input) |
//! | `set:ID=RAW`   | edit value, then Enter        |
//! | `focus`/`blur` | focus, blur                   |

use tagset_engine::Interaction;

/// One scripted step, expanding to one or more interactions
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Step(pub(crate) Vec<Interaction>);

/// Parse a step; used as a clap value parser
pub(crate) fn parse_step(source: &str) -> Result<Step, String> {
    let (verb, argument) = match source.split_once(':') {
        Some((verb, argument)) => (verb, Some(argument)),
        None => (source, None),
    };

    let interactions = match (verb, argument) {
        ("remove-last", None) => vec![Interaction::RemoveLast],
        ("clear", None) => vec![Interaction::Clear],
        ("focus", None) => vec![Interaction::Focus],
        ("blur", None) => vec![Interaction::Blur],
        ("select", Some(id)) => vec![Interaction::select(non_empty(id)?)],
        ("deselect", Some(id)) => vec![Interaction::deselect(non_empty(id)?)],
        ("commit", Some(id)) => vec![Interaction::commit_value(non_empty(id)?)],
        ("edit", Some(assignment)) => {
            let (id, raw) = assignment_parts(assignment)?;
            vec![Interaction::edit_value(id, raw)]
        }
        ("set", Some(assignment)) => {
            let (id, raw) = assignment_parts(assignment)?;
            vec![Interaction::edit_value(id, raw), Interaction::enter(id)]
        }
        _ => return Err(format!("unrecognized action `{source}`")),
    };
    Ok(Step(interactions))
}

fn non_empty(id: &str) -> Result<&str, String> {
    let id = id.trim();
    if id.is_empty() {
        Err("action is missing a tag id".to_string())
    } else {
        Ok(id)
    }
}

fn assignment_parts(assignment: &str) -> Result<(&str, &str), String> {
    let (id, raw) = assignment
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got `{assignment}`"))?;
    Ok((non_empty(id)?, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_bare_verbs() {
        assert_eq!(parse_step("remove-last"), Ok(Step(vec![Interaction::RemoveLast])));
        assert_eq!(parse_step("clear"), Ok(Step(vec![Interaction::Clear])));
    }

    #[test]
    fn parses_selection() {
        assert_eq!(parse_step("select:age"), Ok(Step(vec![Interaction::select("age")])));
        assert_eq!(parse_step("deselect: age "), Ok(Step(vec![Interaction::deselect("age")])));
    }

    #[test]
    fn set_expands_to_edit_and_enter() {
        assert_eq!(
            parse_step("set:age=120"),
            Ok(Step(vec![Interaction::edit_value("age", "120"), Interaction::enter("age")]))
        );
    }

    #[test]
    fn edit_keeps_raw_text_verbatim() {
        assert_eq!(
            parse_step("edit:age= 3.5"),
            Ok(Step(vec![Interaction::edit_value("age", " 3.5")]))
        );
    }

    #[test]
    fn rejects_malformed_actions() {
        assert!(parse_step("select").is_err());
        assert!(parse_step("select:").is_err());
        assert!(parse_step("set:age").is_err());
        assert!(parse_step("clear:all").is_err());
        assert!(parse_step("toggle:age").is_err());
    }
}
