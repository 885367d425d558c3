// Command-line interface for quire
//
// This binary converts Markdown files with the quire engine and prints what it produced. It is a
// development aid: the element tree is meant to be handed to a page layout backend, and printing
// it is how one checks what that backend will receive.
//
// Usage:
//  quire inspect <path> [<format>]      - Convert a Markdown file and print the result (treeviz)
//  quire styles                         - Print the resolved font and color roles
//  quire --list-formats                 - List inspect formats
//
// Configuration:
//
// quire.toml in the working directory is loaded when present; --config <path> layers another
// file on top. Single keys can be overridden with --extra-<section.key> <value>:
//  quire inspect notes.md --extra-highlight.style bw --extra-diagram.scale 3

mod inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use quire_config::{Loader, QuireConfig, ValueKind};
use quire_engine::{Converter, Markdown};
use std::collections::HashMap;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));
            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("quire")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the document trees quire builds from Markdown")
        .long_about(
            "quire converts Markdown into trees of styled document elements (runs, paragraphs,\n\
            chapters, sections, tables, images) for a page layout backend.\n\n\
            Commands:\n  \
            - inspect: Convert a Markdown file and print the element tree\n  \
            - styles:  Print the resolved font and color roles\n\n\
            Extra Parameters:\n  \
            Use --extra-<section.key> <value> to override a configuration key.\n\n\
            Examples:\n  \
            quire inspect notes.md                          # Tree visualization\n  \
            quire inspect notes.md json                     # Element tree as JSON\n  \
            quire inspect notes.md --extra-highlight.style bw\n  \
            quire styles --config print.toml                # Styles after a config file",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available inspect formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quire.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr (RUST_LOG takes precedence)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Convert a Markdown file and print the result")
                .long_about(
                    "Convert a Markdown file and print one stage of the result.\n\n\
                    Formats:\n  \
                    - treeviz:  Element tree visualization (default)\n  \
                    - json:     Element tree as JSON\n  \
                    - ast:      Parsed Markdown syntax tree\n\n\
                    Examples:\n  \
                    quire inspect notes.md             # Tree visualization (default)\n  \
                    quire inspect notes.md ast         # Syntax tree\n  \
                    quire inspect notes.md -v          # With dispatch logging",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format. Defaults to 'treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_FORMATS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("styles")
                .about("Print the resolved font and color roles")
                .long_about(
                    "Print every font and color role after the configuration is applied.\n\n\
                    Examples:\n  \
                    quire styles                        # Built-in styles\n  \
                    quire styles --config print.toml    # After a configuration file",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let matches = build_cli().get_matches_from(&cleaned_args);

    init_logger(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &extra_params,
    );

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: a path is required");
                std::process::exit(1);
            };
            let format = sub_matches
                .get_one::<String>("format")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_FORMAT);
            handle_inspect_command(path, format, &config);
        }
        Some(("styles", _)) => {
            handle_styles_command(&config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Warnings by default, debug with --verbose. RUST_LOG overrides both.
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn handle_inspect_command(path: &str, format: &str, config: &QuireConfig) {
    let source = Markdown::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let converter = build_converter(config);
    log::debug!(
        "converting {path} with transforms: {}",
        converter.transforms().names().join(", ")
    );

    let output = inspect::execute(&source, format, &converter).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

fn handle_styles_command(config: &QuireConfig) {
    let styles = config.style_registry();

    println!("Fonts:");
    for role in styles.font_roles() {
        if let Some(font) = styles.descriptor(role) {
            let style = font.style.names().join("+");
            println!(
                "  {role:<28} {} {} {} {}",
                font.family,
                font.size,
                if style.is_empty() { "normal" } else { &style },
                font.color
            );
        }
    }

    println!("\nColors:");
    for role in styles.color_roles() {
        if let Some(color) = styles.resolve_color(role) {
            println!("  {role:<28} {color}");
        }
    }

    println!("\nHighlight: {} at {}", config.highlight.style, config.highlight.font_size);
    println!(
        "Diagrams: {} at scale {}, placed at {}%",
        config.diagram.languages.join(", "),
        config.diagram.scale,
        config.diagram.image_scale_percent
    );
}

fn handle_list_formats_command() {
    println!("Available inspect formats:\n");
    for format in inspect::AVAILABLE_FORMATS {
        println!("  {format}");
    }
}

fn load_cli_config(explicit_path: Option<&str>, extra_params: &HashMap<String, String>) -> QuireConfig {
    let loader = Loader::new().with_optional_file("quire.toml");
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    let mut keys: Vec<_> = extra_params.keys().collect();
    keys.sort();
    for key in keys {
        let value = override_value(&extra_params[key]);
        loader = loader.set_override(key, value).unwrap_or_else(|err| {
            eprintln!("Invalid override --extra-{key}: {err}");
            std::process::exit(1);
        });
    }

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Numbers and booleans keep their type; everything else is a string.
fn override_value(raw: &str) -> ValueKind {
    if let Ok(flag) = raw.parse::<bool>() {
        ValueKind::Boolean(flag)
    } else if let Ok(number) = raw.parse::<f64>() {
        ValueKind::Float(number)
    } else {
        ValueKind::String(raw.to_string())
    }
}

fn build_converter(config: &QuireConfig) -> Converter {
    config.converter().unwrap_or_else(|err| {
        eprintln!("Invalid configuration: {err}");
        std::process::exit(1);
    })
}
