use clap::Parser;
use clap::error::ErrorKind;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prdpack::PrdError;
use prdpack::cli::{AssembleOptions, Output};
use prdpack::cli::commands::assemble;

const USAGE_EXAMPLE: &str = "Example: prdpack ./output full-prd-package.md";

#[derive(Parser)]
#[command(name = "prdpack")]
#[command(
    version,
    about = "Assemble PRD documents into a single markdown package",
    after_help = USAGE_EXAMPLE
)]
struct Cli {
    /// Directory containing the PRD documents
    #[arg(value_name = "INPUT_DIR", required_unless_present = "show_config")]
    input_dir: Option<PathBuf>,

    /// Output filename, relative to the input directory [default: full-prd-package.md]
    #[arg(value_name = "OUTPUT_FILENAME")]
    output_filename: Option<String>,

    #[arg(long, short, value_name = "FILE", help = "Additional config file")]
    config: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Show what would be assembled, don't write")]
    dry_run: bool,

    #[arg(long = "show-config", help = "Print the effective configuration and exit")]
    show_config: bool,

    #[arg(long, help = "Print the report (or config) as JSON")]
    json: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n{}", style("━━━ PANIC ━━━").red().bold().for_stderr());
        eprintln!(
            "{}",
            style("prdpack encountered an unexpected error:")
                .red()
                .for_stderr()
        );
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "{}",
                style(format!(
                    "Location: {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                ))
                .dim()
                .for_stderr()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(err) = e.downcast_ref::<PrdError>() {
                assemble::log_error(err);
            }
            Output::default().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Help and version exit 0; every other parse failure prints usage to stdout and exits 1
fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{}", e.render());
            println!("{}", USAGE_EXAMPLE);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.show_config {
        assemble::show_config(cli.input_dir, cli.config, cli.json)?;
        return Ok(());
    }

    let input_dir = cli
        .input_dir
        .ok_or_else(|| anyhow::anyhow!("missing required argument <INPUT_DIR>"))?;

    assemble::run(AssembleOptions {
        input_dir,
        output_filename: cli.output_filename,
        config: cli.config,
        dry_run: cli.dry_run,
        json: cli.json,
        quiet: cli.quiet,
    })?;

    Ok(())
}
