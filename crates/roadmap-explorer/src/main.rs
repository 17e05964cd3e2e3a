//! Roadmap Explorer CLI
//!
//! Loads the roadmap document once, applies the filter controls given as
//! flags and renders the resulting cards to stdout. Logs go to stderr.

mod config;
mod render;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use config::ExplorerConfig;
use roadmap_core::{
    difficulty_options, filter, title_options, to_view_models, DifficultyFilter, FilterSpec,
    TitleSelection,
};
use roadmap_model::RoadmapCollection;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

fn cli() -> Command {
    Command::new("roadmap-explorer")
        .version(roadmap_core::VERSION)
        .about("Browse learning roadmaps from a JSON document")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Roadmap document (overrides config data_path)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            Command::new("browse")
                .about("Filter roadmaps and render their cards")
                .arg(
                    Arg::new("difficulty")
                        .long("difficulty")
                        .default_value("all")
                        .value_parser(|s: &str| s.parse::<DifficultyFilter>())
                        .help("all, beginner, intermediate, advanced or expert"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .default_value(roadmap_core::ALL_ROADMAPS)
                        .help("Exact roadmap title"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .default_value("")
                        .help("Keyword matched against titles, descriptions, tools, topics and resources"),
                )
                .arg(
                    Arg::new("show-tools")
                        .long("show-tools")
                        .value_parser(value_parser!(bool))
                        .help("Show the tools section (true/false)"),
                )
                .arg(
                    Arg::new("collapse-levels")
                        .long("collapse-levels")
                        .value_parser(value_parser!(bool))
                        .help("Collapse skill level sections (true/false)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output view models as JSON"),
                ),
        )
        .subcommand(
            Command::new("options")
                .about("List the difficulty and roadmap selector choices")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("validate").about("Load the document and report the result"))
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn resolve_config(matches: &ArgMatches) -> anyhow::Result<ExplorerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ExplorerConfig::from_file(path)?,
        None => ExplorerConfig::new(),
    };
    if let Some(data) = matches.get_one::<PathBuf>("data") {
        config = config.with_data_path(data);
    }
    Ok(config)
}

fn load_collection(config: &ExplorerConfig) -> anyhow::Result<Arc<RoadmapCollection>> {
    roadmap_store::load(&config.data_path)
        .with_context(|| format!("failed to load roadmaps from {}", config.data_path.display()))
}

fn browse<W: Write>(out: &mut W, mut config: ExplorerConfig, args: &ArgMatches) -> anyhow::Result<()> {
    if let Some(show) = args.get_one::<bool>("show-tools") {
        config = config.with_show_tools(*show);
    }
    if let Some(collapse) = args.get_one::<bool>("collapse-levels") {
        config = config.with_collapse_levels(*collapse);
    }

    let spec = FilterSpec {
        difficulty: args
            .get_one::<DifficultyFilter>("difficulty")
            .copied()
            .unwrap_or_default(),
        title: args
            .get_one::<String>("title")
            .map(|t| TitleSelection::from(t.as_str()))
            .unwrap_or_default(),
        search: args.get_one::<String>("search").cloned().unwrap_or_default(),
    };

    let collection = load_collection(&config)?;
    let outcome = filter(collection.as_slice(), &spec);
    let views = to_view_models(outcome, config.view_options());

    if args.get_flag("json") {
        render::json(out, &views)?;
    } else {
        render::page_header(out, &config)?;
        render::cards(out, &views)?;
    }
    Ok(())
}

fn options<W: Write>(out: &mut W, config: &ExplorerConfig, args: &ArgMatches) -> anyhow::Result<()> {
    let collection = load_collection(config)?;
    let difficulties = difficulty_options();
    let titles = title_options(&collection);

    if args.get_flag("json") {
        render::json(
            out,
            &serde_json::json!({ "difficulty": difficulties, "roadmap": titles }),
        )?;
    } else {
        writeln!(out, "Difficulty Level:")?;
        for d in difficulties {
            writeln!(out, "  {d}")?;
        }
        writeln!(out, "Choose Roadmap:")?;
        for t in titles {
            writeln!(out, "  {t}")?;
        }
    }
    Ok(())
}

fn validate<W: Write>(out: &mut W, config: &ExplorerConfig) -> anyhow::Result<()> {
    let collection = load_collection(config)?;
    writeln!(
        out,
        "OK: {} roadmaps loaded from {}",
        collection.len(),
        config.data_path.display()
    )?;
    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = resolve_config(matches)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("options", args)) => options(&mut out, &config, args),
        Some(("validate", _)) => validate(&mut out, &config),
        Some(("browse", args)) => browse(&mut out, config, args),
        // No subcommand: browse with default filters
        _ => {
            let defaults = cli().get_matches_from(["roadmap-explorer", "browse"]);
            let args = defaults
                .subcommand_matches("browse")
                .context("browse defaults missing")?;
            browse(&mut out, config, args)
        }
    }
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
