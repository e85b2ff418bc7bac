//! `tagset` command-line driver
//!
//! Inspect the built-in vocabularies, check editor configuration files, and
//! replay scripted editing sessions against a snapshot.

mod action;
mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tagset_engine::{
    offerable, EditorSettings, SelectionSet, TagEditor, TagEvent, TagHost, TagSnapshot, TagValues,
    Vocabulary, VocabularySource,
};
use tagset_taxonomy::{count_nodes, validate_forest, TaxonomyKind};
use tracing_subscriber::EnvFilter;

use crate::action::{parse_step, Step};
use crate::render::render_tree;

fn cli() -> Command {
    Command::new("tagset")
        .version(tagset_engine::VERSION)
        .about("Controlled-vocabulary tag editor")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Editor settings file (.toml, .yaml, .yml or .json)"),
        )
        .arg(
            Arg::new("vocabulary")
                .long("vocabulary")
                .global(true)
                .value_parser(parse_vocabulary)
                .help("subject, trial, or a comma-separated list of ids; overrides the configured vocabulary"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level unless RUST_LOG is set"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the options offered for a selection")
                .arg(tags_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the vocabulary source as JSON"),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Replay interactions against a snapshot and print the emitted events")
                .arg(tags_arg())
                .arg(
                    Arg::new("values")
                        .long("values")
                        .help("JSON object of tag values of the starting snapshot"),
                )
                .arg(
                    Arg::new("action")
                        .long("action")
                        .short('a')
                        .action(ArgAction::Append)
                        .value_parser(parse_step)
                        .help("select:ID, deselect:ID, remove-last, clear, edit:ID=RAW, commit:ID, set:ID=RAW, focus, blur"),
                ),
        )
        .subcommand(
            Command::new("check-config")
                .about("Load an editor settings file and print it back")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(Command::new("validate").about("Check the built-in vocabularies"))
}

fn tags_arg() -> Arg {
    Arg::new("tags")
        .long("tags")
        .value_delimiter(',')
        .help("Comma-separated tag list of the snapshot")
}

fn parse_vocabulary(source: &str) -> Result<VocabularySource, String> {
    if let Ok(kind) = source.parse::<TaxonomyKind>() {
        return Ok(kind.into());
    }
    let ids: Vec<&str> = source.split(',').map(str::trim).filter(|id| !id.is_empty()).collect();
    if ids.is_empty() {
        return Err("vocabulary needs a built-in name or at least one id".to_string());
    }
    Ok(VocabularySource::custom(ids))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let Some((command, args)) = matches.subcommand() else {
        return Ok(());
    };
    init_tracing(args.get_flag("verbose"), args.get_flag("log-json"));

    match command {
        "tree" => {
            let settings = settings(args)?;
            if args.get_flag("json") {
                let json = match &settings.vocabulary {
                    VocabularySource::BuiltIn(kind) => serde_json::to_string_pretty(kind.options()),
                    VocabularySource::Custom(ids) => serde_json::to_string_pretty(ids),
                }?;
                println!("{json}");
            } else {
                let tags = tags(args);
                let vocabulary = Vocabulary::resolve(settings.vocabulary);
                let selected = SelectionSet::from_tags(&tags);
                let rows = offerable(vocabulary.options(), &selected);
                print!("{}", render_tree(rows.into_iter().map(|(_, option)| option), &selected));
            }
        }
        "apply" => apply(settings(args)?, args)?,
        "check-config" => {
            let path = args
                .get_one::<PathBuf>("path")
                .context("missing settings path")?;
            let settings = EditorSettings::load(path)
                .with_context(|| format!("invalid settings in {}", path.display()))?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        "validate" => validate()?,
        _ => {}
    }
    Ok(())
}

fn init_tracing(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn settings(matches: &ArgMatches) -> Result<EditorSettings> {
    let mut settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => EditorSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => EditorSettings::new(),
    };
    if let Some(source) = matches.get_one::<VocabularySource>("vocabulary") {
        settings = settings.with_vocabulary(source.clone());
    }
    Ok(settings)
}

/// Prints each event as a JSON line and persists it into the snapshot
struct ReplayHost {
    snapshot: TagSnapshot,
    failure: Option<serde_json::Error>,
}

impl ReplayHost {
    fn record(&mut self, event: TagEvent) {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                self.failure.get_or_insert(err);
            }
        }
        event.apply_to(&mut self.snapshot);
    }
}

impl TagHost for ReplayHost {
    fn tags_changed(&mut self, tags: Vec<String>) {
        self.record(TagEvent::TagsChanged(tags));
    }

    fn tag_values_changed(&mut self, values: TagValues) {
        self.record(TagEvent::TagValueChanged(values));
    }

    fn focused(&mut self) {
        tracing::info!("Editor focused");
    }

    fn blurred(&mut self) {
        tracing::info!("Editor blurred");
    }
}

fn tags(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("tags")
        .map(|tags| tags.map(|tag| tag.trim().to_string()).filter(|tag| !tag.is_empty()).collect())
        .unwrap_or_default()
}

fn apply(settings: EditorSettings, args: &ArgMatches) -> Result<()> {
    let tags = tags(args);
    let tag_values: TagValues = match args.get_one::<String>("values") {
        Some(json) => serde_json::from_str(json).context("--values must be a JSON object of numbers")?,
        None => TagValues::new(),
    };

    let mut editor = TagEditor::new(settings);
    let mut host = ReplayHost {
        snapshot: TagSnapshot::new(tags, tag_values),
        failure: None,
    };

    let steps = args.get_many::<Step>("action").into_iter().flatten();
    for Step(interactions) in steps {
        for interaction in interactions {
            let snapshot = host.snapshot.clone();
            editor.dispatch(&mut host, &snapshot, interaction.clone());
        }
    }
    if let Some(err) = host.failure {
        return Err(err).context("failed to encode event");
    }

    println!("{}", serde_json::json!({ "snapshot": host.snapshot }));
    Ok(())
}

fn validate() -> Result<()> {
    let mut failures = 0;
    for kind in TaxonomyKind::ALL {
        let forest = kind.options();
        match validate_forest(forest) {
            Ok(()) => println!("{kind}: {} options OK", count_nodes(forest)),
            Err(err) => {
                failures += 1;
                println!("{kind}: {err}");
            }
        }
    }
    if failures > 0 {
        bail!("{failures} vocabularies failed validation");
    }
    Ok(())
}
