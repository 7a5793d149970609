#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use maxcut_demo::core::schema::ProblemSize;
use maxcut_demo::run_cmd::{self, RunOptions};
use maxcut_demo::session::ViewMode;
use maxcut_demo::sizes_cmd;

#[derive(Parser, Debug)]
#[command(name = "maxcut-demo")]
#[command(about = "Structured Entropy MaxCut solver demo", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set MAXCUT_DEMO_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the demo for one graph size and show the results
    Run {
        /// Graph size (5, 20 or 50)
        #[arg(long)]
        size: Option<ProblemSize>,
        /// Result view to display
        #[arg(long, value_enum)]
        view: Option<ViewMode>,
        /// Write machine-readable JSON result to this file
        #[arg(long)]
        json: Option<std::path::PathBuf>,
        /// Write a standalone HTML report to this file
        #[arg(long)]
        html: Option<std::path::PathBuf>,
        /// TOML settings file
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Seed for the simulated delay jitter
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List supported graph sizes
    Sizes,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("MAXCUT_DEMO_LOG").unwrap_or_else(|_| {
        if verbose { "maxcut_demo=debug".to_string() } else { "maxcut_demo=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { size, view, json, html, config, seed } => {
            run_cmd::run(RunOptions { size, view, json, html, config, seed }).await
        }
        Commands::Sizes => sizes_cmd::run(),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
