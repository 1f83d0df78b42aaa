use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shapeir::config::CliConfig;
use shapeir::{handle_print, handle_print_strict, handle_validate, load_file};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shapeir")]
#[command(about = "Validate and print native module type containers", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every type of a container in declaration order
    Print {
        /// Input container (JSON format)
        #[arg(short, long)]
        input: PathBuf,

        /// Printer settings (TOML format)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print nothing unless every type can be printed
        #[arg(long)]
        strict: bool,
    },

    /// Check every type of a container for shape errors
    Validate {
        /// Input container (JSON format)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.debug {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.debug)
        .with_writer(io::stderr)
        .init();

    let summary = match cli.command {
        Commands::Print {
            input,
            config,
            strict,
        } => {
            let printer_config = match config {
                Some(path) => CliConfig::load(&path)?.printer,
                None => CliConfig::default().printer,
            };
            let file = load_file(&input)?;
            if strict {
                handle_print_strict(&file, printer_config, &mut io::stdout(), &mut io::stderr())?
            } else {
                handle_print(&file, printer_config, &mut io::stdout(), &mut io::stderr())?
            }
        }
        Commands::Validate { input } => {
            let file = load_file(&input)?;
            handle_validate(&file, &mut io::stdout(), &mut io::stderr())?
        }
    };

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
