use anyhow::Context;
use colored::Colorize;

use gdiff_engine::{compare_graphs, CompareOptions};
use gdiff_graph::JsonGraphLoader;
use gdiff_schema::SchemaRegistry;
use gdiff_types::{DifferenceLog, Record};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format),
        Command::Schema(args) => cmd_schema(args),
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let registry = SchemaRegistry::from_json_file(&args.schema)
        .with_context(|| format!("loading schema {}", args.schema))?;

    let options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            CompareOptions::from_toml(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => CompareOptions::default(),
    };

    let loader = JsonGraphLoader::new(&args.root);
    let log = compare_graphs(&loader, &registry, &options, &args.graph_a, &args.graph_b);

    match format {
        OutputFormat::Text => render_text(&log),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(log.records())?),
    }
    Ok(())
}

fn render_text(log: &DifferenceLog) {
    for record in log {
        match record {
            Record::Info { message } => println!("{}", message.dimmed()),
            Record::Warning { message } => {
                println!("{} {}", "warning:".yellow().bold(), message)
            }
            Record::Error { message } => println!("{} {}", "error:".red().bold(), message),
            Record::Difference {
                path_a,
                path_b,
                kind,
                value_a,
                value_b,
            } => {
                println!("{} [{}]", "difference".cyan().bold(), kind);
                println!("  {} = {}", path_a.bold(), value_a);
                println!("  {} = {}", path_b.bold(), value_b);
            }
        }
    }
    println!(
        "{} differences, {} warnings, {} errors",
        log.differences().to_string().cyan().bold(),
        log.warnings().to_string().yellow(),
        log.errors().to_string().red(),
    );
}

fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    let registry = SchemaRegistry::from_json_file(&args.schema)
        .with_context(|| format!("loading schema {}", args.schema))?;

    println!("{}", "Structs:".bold());
    for name in registry.struct_names() {
        let fields = registry
            .struct_def(name)
            .map(|def| def.fields.len())
            .unwrap_or(0);
        println!("  {} ({} fields)", name.cyan(), fields);
    }

    println!("{}", "Enums:".bold());
    for name in registry.enum_names() {
        let entries = registry
            .enum_def(name)
            .map(|def| def.entries.len())
            .unwrap_or(0);
        println!("  {} ({} entries)", name.yellow(), entries);
    }
    Ok(())
}
