//! Command-line interface for tokenized strings
//! Converts token sequences between formats, renders them with substitutions, and
//! looks up token completions.
//!
//! Usage:
//!   tokenized convert `<path>` [--from `<format>`] [--to `<format>`]  - Convert between formats
//!   tokenized render `<path>` [--set `<token=value>`]...             - Print the flattened text
//!   tokenized complete `<substring>`                                 - List matching tokens
//!   tokenized list-formats                                           - List available formats
//!
//! `<path>` may be `-` to read from stdin.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::collections::HashMap;
use std::io::Read;
use tokenized::codec::{AllowListCodec, Delimiters};
use tokenized::editing::Completions;
use tokenized::formats::{FormatRegistry, TokenizedFormatter};
use tokenized::TokenSequence;
use tokenized_config::{Loader, MissingSubstitution, TokenizedConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() {
    init_tracing();

    let matches = Command::new("tokenized")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and rendering tokenized strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .global(true)
                .help("Token prefix delimiter (default: %[)"),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .global(true)
                .help("Token suffix delimiter (default: ])"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .short('t')
                .global(true)
                .value_delimiter(',')
                .help("Comma-separated list of accepted token identifiers"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a token sequence between formats")
                .arg(path_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format")
                        .default_value("tokenized"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Print delimited text with tokens replaced by values")
                .arg(path_arg())
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .action(ArgAction::Append)
                        .help("Substitution value as token=value (repeatable)"),
                )
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .help("Inserted between elements"),
                ),
        )
        .subcommand(
            Command::new("complete")
                .about("List tokens whose label starts with a substring")
                .arg(
                    Arg::new("substring")
                        .help("Text typed so far")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("label")
                        .long("label")
                        .short('l')
                        .action(ArgAction::Append)
                        .help("Display label as token=label (repeatable)"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available formats"))
        .get_matches();

    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let from = convert_matches.get_one::<String>("from").unwrap();
            let to = convert_matches.get_one::<String>("to").unwrap();
            handle_convert_command(&config, path, from, to);
        }
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            let pairs = collect_pairs(render_matches, "set");
            let separator = render_matches
                .get_one::<String>("separator")
                .cloned()
                .unwrap_or_else(|| config.render.separator.clone());
            handle_render_command(&config, path, &pairs, &separator);
        }
        Some(("complete", complete_matches)) => {
            let substring = complete_matches.get_one::<String>("substring").unwrap();
            let labels = collect_pairs(complete_matches, "label");
            handle_complete_command(&config, substring, &labels);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&config);
        }
        _ => unreachable!(),
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);
    tracing_subscriber::registry().with(layer).init();
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Input file, or - for stdin")
        .required(true)
        .index(1)
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> TokenizedConfig {
    // Global flags may follow the subcommand name.
    let matches = matches.subcommand().map(|(_, sub)| sub).unwrap_or(matches);

    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_project_file(),
    };

    let prefix = delimiter_arg(matches, "prefix");
    let suffix = delimiter_arg(matches, "suffix");
    let mut config = loader
        .with_delimiters(prefix, suffix)
        .and_then(Loader::build)
        .unwrap_or_else(|e| fail(format!("Failed to load configuration: {}", e)));

    if let Some(tokens) = matches.get_many::<String>("tokens") {
        config.tokens.allowed = tokens.cloned().collect();
    }

    tracing::debug!(
        prefix = %config.delimiters.prefix,
        suffix = %config.delimiters.suffix,
        allowed = config.tokens.allowed.len(),
        "configuration loaded"
    );
    config
}

fn delimiter_arg<'a>(matches: &'a ArgMatches, key: &str) -> Option<&'a str> {
    let value = matches.get_one::<String>(key)?;
    if value.is_empty() {
        fail(format!("--{} must not be empty", key));
    }
    Some(value.as_str())
}

fn delimiters(config: &TokenizedConfig) -> Delimiters {
    Delimiters::new(&config.delimiters.prefix, &config.delimiters.suffix)
}

/// Built-in formats; the delimited format honors the allowed token list.
fn registry(config: &TokenizedConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults(delimiters(config));
    if !config.tokens.allowed.is_empty() {
        registry.register(TokenizedFormatter::restricted(
            delimiters(config),
            AllowListCodec::new(config.tokens.allowed.iter().cloned()),
        ));
    }
    registry
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| fail(format!("Failed to read {}: {}", path, e)))
}

/// Splits repeated `key=value` arguments. Later keys win.
fn collect_pairs(matches: &ArgMatches, name: &str) -> HashMap<String, String> {
    matches
        .get_many::<String>(name)
        .into_iter()
        .flatten()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => fail(format!("expected key=value, got '{}'", pair)),
        })
        .collect()
}

fn parse_tokenized(config: &TokenizedConfig, source: &str) -> TokenSequence<String> {
    registry(config)
        .deserialize(source, "tokenized")
        .unwrap_or_else(|e| fail(e))
}

/// Handle the convert command
fn handle_convert_command(config: &TokenizedConfig, path: &str, from: &str, to: &str) {
    let source = read_input(path);
    let registry = registry(config);

    let sequence = registry
        .deserialize(&source, from)
        .unwrap_or_else(|e| fail(e));
    let output = registry.serialize(&sequence, to).unwrap_or_else(|e| fail(e));

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the render command
fn handle_render_command(
    config: &TokenizedConfig,
    path: &str,
    values: &HashMap<String, String>,
    separator: &str,
) {
    let source = read_input(path);
    let sequence = parse_tokenized(config, source.trim_end_matches('\n'));
    let delimiters = delimiters(config);

    let rendered = sequence.string(separator, |token| match values.get(token) {
        Some(value) => value.clone(),
        None => match config.render.missing {
            MissingSubstitution::Identifier => token.clone(),
            MissingSubstitution::Empty => String::new(),
            MissingSubstitution::Delimited => delimiters.wrap(token),
        },
    });

    println!("{}", rendered);
}

/// Handle the complete command
fn handle_complete_command(
    config: &TokenizedConfig,
    substring: &str,
    labels: &HashMap<String, String>,
) {
    let mut completions: Completions<String> =
        Completions::new().with_min_substring_len(config.completions.min_substring_len);
    for token in &config.tokens.allowed {
        let label = labels.get(token).unwrap_or(token);
        completions.insert(token.clone(), label.as_str());
    }

    for (token, label) in completions.matching(substring) {
        if label == token {
            println!("{}", token);
        } else {
            println!("{}\t{}", token, label);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &TokenizedConfig) {
    let registry = registry(config);
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}", name);
        println!("    {}", description);
    }
}
