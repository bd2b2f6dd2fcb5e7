//! Nested CLI - dot-path lookups on JSON documents

use std::fs;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use nested::{FixSuggestion, LookupReport, Map, Mode, NestedConfig, NestedError, TimeLayout};

#[derive(Parser)]
#[command(name = "nested")]
#[command(about = "Typed dot-path lookups into JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a path with every accessor and print a JSON report
    Lookup {
        /// Dot path, e.g. advert.contact.name
        path: String,

        /// JSON document (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<String>,

        /// Timestamp layout: rfc3339, rfc2822, ansic or a strftime format
        #[arg(short, long)]
        layout: Option<String>,

        /// Require every path segment to be consumed
        #[arg(long)]
        strict: bool,

        /// Accept a leaf before the end of the path (overrides config)
        #[arg(long, conflicts_with = "strict")]
        lenient: bool,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },

    /// Re-parse the JSON string stored at a path and print it
    Sub {
        /// Dot path to a string holding JSON
        path: String,

        /// JSON document (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<String>,
    },
}

fn main() {
    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lookup {
            path,
            file,
            layout,
            strict,
            lenient,
            pretty,
        } => {
            let mode = match (strict, lenient) {
                (true, _) => Some(Mode::Strict),
                (_, true) => Some(Mode::Lenient),
                _ => None,
            };
            lookup(&path, file.as_deref(), layout, mode, pretty)
        }
        Commands::Sub { path, file } => sub(&path, file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn lookup(
    path: &str,
    file: Option<&str>,
    layout_override: Option<String>,
    mode_override: Option<Mode>,
    pretty: bool,
) -> Result<(), NestedError> {
    if path.is_empty() {
        return Err(NestedError::MissingPath);
    }

    // Flags win; the config file is only read for settings they leave open
    let (layout, mode) = match (layout_override, mode_override) {
        (Some(layout), Some(mode)) => (TimeLayout::from(layout), mode),
        (layout_override, mode_override) => {
            let config = NestedConfig::load()?.with_env();
            (
                layout_override
                    .map(TimeLayout::from)
                    .unwrap_or_else(|| config.layout()),
                mode_override.unwrap_or_else(|| config.mode()),
            )
        }
    };
    layout.validate()?;

    let data = read_document(file)?;
    debug!(path, %layout, ?mode, "looking up");

    let report = LookupReport::build(path, data, &layout, mode);
    let out = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);

    Ok(())
}

fn sub(path: &str, file: Option<&str>) -> Result<(), NestedError> {
    if path.is_empty() {
        return Err(NestedError::MissingPath);
    }

    let data = read_document(file)?;
    match data.sub_from_string(path) {
        Some(sub) => {
            println!("{}", serde_json::to_string_pretty(&sub)?);
            Ok(())
        }
        None => {
            eprintln!("{} no JSON object at '{}'", "✗".red(), path);
            std::process::exit(1);
        }
    }
}

fn read_document(file: Option<&str>) -> Result<Map, NestedError> {
    let text = match file {
        Some(file) => fs::read_to_string(file)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Map::from_json(&text)
}
