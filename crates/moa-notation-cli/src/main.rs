use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use moa_notation_macros::lint::has_errors;
use moa_notation_macros::{builtin, export, lint, Expander, ExportFormat, MacroTable, MathConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "moa-notation")]
#[command(about = "Inspect, expand and export MoA notation macros", long_about = None)]
struct Cli {
    /// Macro configuration JSON to use instead of the built-in MoA table
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a macro configuration file and report authoring problems
    Check {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    #[command(flatten)]
    Table(TableCommands),
}

/// Commands that operate on the active table (built-in or `--config`).
#[derive(Subcommand)]
enum TableCommands {
    /// List every macro with its arity and template
    List,
    /// Show a single macro
    Show {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Expand one macro with the given arguments
    Expand {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },
    /// Expand every macro invocation in a formula
    Render {
        #[arg(value_name = "FORMULA")]
        formula: String,
    },
    /// Write the table as an engine configuration snippet
    Export {
        /// mathjax2, mathjax3, katex or json
        #[arg(long, default_value_t = ExportFormat::MathJax2)]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_table(config: Option<&Path>) -> anyhow::Result<MacroTable> {
    match config {
        Some(path) => {
            let config = MathConfig::load_from_path(path)
                .with_context(|| format!("Failed to load macro configuration {:?}", path))?;
            config
                .to_table()
                .with_context(|| format!("Invalid macro configuration {:?}", path))
        }
        None => Ok(builtin::table().clone()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        // A checked file stands in for --config
        Commands::Check { path } => check(path),
        Commands::Table(command) => {
            let table = load_table(cli.config.as_deref())?;
            run(&table, command)
        }
    }
}

fn check(path: &Path) -> anyhow::Result<()> {
    let table = load_table(Some(path))?;
    let findings = lint(&table);
    for finding in &findings {
        println!("{}", finding);
    }
    if has_errors(&findings) {
        bail!("{:?} has template errors", path);
    }
    println!("{} macros OK ({} warnings)", table.len(), findings.len());
    Ok(())
}

fn run(table: &MacroTable, command: &TableCommands) -> anyhow::Result<()> {
    match command {
        TableCommands::List => {
            for entry in table {
                println!("{:<12} {}  {}", entry.name(), entry.arity(), entry.template());
            }
        }
        TableCommands::Show { name } => {
            let Some(entry) = table.lookup(name) else {
                bail!("Unknown macro '{}'", name);
            };
            println!("name:     \\{}", entry.name());
            println!("arity:    {}", entry.arity());
            println!("template: {}", entry.template());
        }
        TableCommands::Expand { name, args } => {
            println!("{}", table.expand(name, args)?);
        }
        TableCommands::Render { formula } => {
            println!("{}", Expander::new(table).render(formula)?);
        }
        TableCommands::Export { format, output } => {
            let rendered = export(table, *format)?;
            match output {
                Some(path) => {
                    fs::write(path, rendered)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    log::info!("Wrote {} macros as {} to {:?}", table.len(), format, path);
                }
                None => print!("{}", rendered),
            }
        }
    }
    Ok(())
}
