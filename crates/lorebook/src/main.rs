//! `lorebook` command line.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use lorebook::{load_catalog, LorebookConfig, Registry, ResolveContext};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Query the lorebook catalog.
#[derive(Parser, Debug)]
#[command(name = "lorebook", version, about)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the collection data files
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full schema document
    Schema,

    /// List collections with their entry counts
    Collections,

    /// Fetch one entry by id
    Get {
        collection: String,
        id: String,

        /// Skip expression evaluation
        #[arg(long)]
        raw: bool,
    },

    /// Fetch the entries matching every filter
    List {
        collection: String,

        /// Filter as key=value, e.g. -f level_lte=3
        #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
        filters: Vec<(String, Value)>,

        /// Skip expression evaluation
        #[arg(long)]
        raw: bool,
    },
}

/// Splits `key=value`; the value is read as JSON when it parses, else as a string.
fn parse_filter(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty filter key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LorebookConfig::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => LorebookConfig::default(),
    };
    if let Some(dir) = cli.data_dir.clone() {
        config = config.with_data_dir(dir);
    }

    setup_tracing(cli.verbose, &config.log_filter);
    debug!(?config, "settings resolved");

    let registry = load_catalog(&config).context("loading catalog")?;
    run(&registry, cli.command)
}

fn setup_tracing(verbose: bool, log_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("lorebook=debug,lorebook_filter=debug")
        } else {
            EnvFilter::new(log_filter)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(registry: &Registry, command: Command) -> anyhow::Result<()> {
    let ctx = ResolveContext::default();

    match command {
        Command::Schema => print!("{}", registry.full_schema()),
        Command::Collections => {
            for collection in registry.collections() {
                println!("{}\t{}", collection.id(), collection.len());
            }
        }
        Command::Get {
            collection,
            id,
            raw,
        } => {
            let info = registry
                .collection(&collection)
                .with_context(|| format!("unknown collection '{collection}'"))?;
            let key = lorebook::filter::fetch_one_field(info.type_name());
            let args = json!({ "id": id, "skipExpressionEvaluation": raw });
            let entry = registry.resolve(&key, &args, &ctx)?;
            if entry.is_null() {
                bail!("{collection} '{id}' not found");
            }
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Command::List {
            collection,
            filters,
            raw,
        } => {
            if registry.collection(&collection).is_none() {
                bail!("unknown collection '{collection}'");
            }
            let filter: Map<String, Value> = filters.into_iter().collect();
            let args = json!({ "filter": filter, "skipExpressionEvaluation": raw });
            let entries = registry.resolve(&collection, &args, &ctx)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_values_parse_as_json_or_string() {
        assert_eq!(parse_filter("level_lte=3").unwrap(), ("level_lte".into(), json!(3)));
        assert_eq!(parse_filter("ritual_eq=true").unwrap(), ("ritual_eq".into(), json!(true)));
        assert_eq!(
            parse_filter("school_eq=evocation").unwrap(),
            ("school_eq".into(), json!("evocation"))
        );
        assert_eq!(
            parse_filter(r#"cost_in=[1, 10]"#).unwrap(),
            ("cost_in".into(), json!([1, 10]))
        );
    }

    #[test]
    fn filter_needs_key_and_separator() {
        assert!(parse_filter("level_lte").is_err());
        assert!(parse_filter("=3").is_err());
    }

    #[test]
    fn cli_parses_repeated_filters() {
        let cli = Cli::try_parse_from([
            "lorebook", "list", "spells", "-f", "level_lte=2", "-f", "classes_has=wizard", "--raw",
        ])
        .unwrap();
        match cli.command {
            Command::List { filters, raw, .. } => {
                assert_eq!(filters.len(), 2);
                assert!(raw);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
