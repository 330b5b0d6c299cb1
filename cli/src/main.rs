use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use graphql_import_core::extract_imports;
use graphql_import_loader::{
    ImportConfig, OutputConfig, OutputFormat, SchemaLoader, format_directives, format_loaded,
};

#[derive(Debug, Parser)]
#[command(name = "graphql-import")]
#[command(about = "Resolve GraphQL schema files linked by `# import` directives")]
struct Cli {
    /// Log loading progress to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a schema and every file it imports, then print the result.
    Load(LoadArgs),
    /// Print the import directives of one file without following them.
    Directives(DirectivesArgs),
}

#[derive(Debug, Args)]
struct LoadArgs {
    /// Root schema file.
    #[arg(required_unless_present = "config", conflicts_with = "config")]
    path: Option<PathBuf>,
    /// YAML configuration listing root schemas and output settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format (overrides the configuration; default: sdl).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Print every loaded file instead of only the root (SDL output).
    #[arg(long)]
    include_imports: bool,
}

#[derive(Debug, Args)]
struct DirectivesArgs {
    /// Schema file to scan.
    path: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Load(args) => run_load(args),
        Command::Directives(args) => run_directives(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_load(args: LoadArgs) -> Result<(), String> {
    let (roots, output) = match (args.path, args.config) {
        (Some(path), _) => (vec![path], OutputConfig::default()),
        (None, Some(config_path)) => {
            let config = ImportConfig::load(&config_path).map_err(|e| e.to_string())?;
            let roots = config
                .resolve_schemas(&config_path)
                .map_err(|e| e.to_string())?;
            (roots, config.output)
        }
        (None, None) => return Err("Specify a schema path or --config".to_string()),
    };

    let format = args.format.unwrap_or(output.format);
    let include_imports = args.include_imports || output.include_imports;

    // Each root gets its own visited set.
    let loader = SchemaLoader::new();
    for root in &roots {
        let loaded = loader.load(root).map_err(|e| e.to_string())?;
        let rendered =
            format_loaded(&loaded, format, include_imports).map_err(|e| e.to_string())?;
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

fn run_directives(args: DirectivesArgs) -> Result<(), String> {
    let text = fs::read_to_string(&args.path)
        .map_err(|err| format!("Failed to read '{}': {err}", args.path.display()))?;
    let directives =
        extract_imports(&text).map_err(|err| format!("{}: {err}", args.path.display()))?;
    let rendered = format_directives(&directives, args.format).map_err(|e| e.to_string())?;
    println!("{}", rendered.trim_end());
    Ok(())
}
