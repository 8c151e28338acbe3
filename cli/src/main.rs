use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use nsconfig_core::{Namespace, TypeRegistry, validate_schemas};
use nsconfig_manifest::SchemaManifest;
use nsconfig_parser::{ConfigMap, Constants, parse_config_file};

/// Output format for dumped configuration values.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "nsconfig")]
#[command(about = "Schema-validated namespaced configuration tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a configuration file against a schema manifest.
    Check(CheckArgs),
    /// Parse a configuration file and print its typed values.
    Dump(DumpArgs),
    /// Validate a schema manifest's structure.
    ValidateSchema(ValidateSchemaArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Path to the schema manifest (.json, .yaml, or .yml).
    #[arg(long)]
    schema: PathBuf,
    /// Configuration file to check.
    config: PathBuf,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Path to the schema manifest (.json, .yaml, or .yml).
    #[arg(long)]
    schema: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Configuration file to parse.
    config: PathBuf,
}

#[derive(Debug, Args)]
struct ValidateSchemaArgs {
    /// Path to the schema manifest.
    schema: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Dump(args) => run_dump(args),
        Command::ValidateSchema(args) => run_validate_schema(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load_schemas(path: &Path) -> Result<(Vec<Namespace>, Constants), String> {
    let manifest = SchemaManifest::load(path)
        .map_err(|err| format!("Failed to load manifest '{}': {err}", path.display()))?;
    let schemas = manifest
        .build_schemas(&TypeRegistry::with_builtins())
        .map_err(|err| err.to_string())?;
    Ok((schemas, manifest.constants))
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let (schemas, constants) = load_schemas(&args.schema)?;
    let config =
        parse_config_file(&args.config, &schemas, constants).map_err(|err| err.to_string())?;

    let values: usize = config.values().map(BTreeMap::len).sum();
    println!("OK: {} namespace(s), {values} value(s).", config.len());
    Ok(())
}

fn run_dump(args: DumpArgs) -> Result<(), String> {
    let (schemas, constants) = load_schemas(&args.schema)?;
    let config =
        parse_config_file(&args.config, &schemas, constants).map_err(|err| err.to_string())?;

    println!("{}", render_config(&config, args.format)?);
    Ok(())
}

fn render_config(config: &ConfigMap, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|err| format!("Failed to serialize configuration: {err}")),
        CliOutputFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|err| format!("Failed to serialize configuration: {err}")),
    }
}

fn run_validate_schema(args: ValidateSchemaArgs) -> Result<(), String> {
    let (schemas, _) = load_schemas(&args.schema)?;

    let errors = validate_schemas(&schemas);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        return Err(format!("{} schema validation error(s)", errors.len()));
    }

    println!("Validated {} namespace(s).", schemas.len());
    Ok(())
}
