use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use coachgg_data::Session;
use coachgg_runner::{build_report, ExportFormat};

mod overview;

#[derive(Debug, Parser)]
#[command(name = "coachgg")]
#[command(about = "CoachGG profile stats and report export", long_about = None)]
struct Cli {
    /// Report settings (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print aggregated stats as JSON
    Stats { input: PathBuf },
    /// Print a dashboard overview table
    Overview { input: PathBuf },
    /// Print the paginated text report
    Preview { input: PathBuf },
    /// Write the report next to the bundle or into --out-dir
    Export {
        input: PathBuf,
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        #[arg(short, long, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        /// Access token for the export session
        #[arg(long)]
        token: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = coachgg_runner::load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded report config");

    match cli.command {
        Command::Stats { input } => {
            let data = coachgg_runner::load_bundle_from_path(&input)?;
            let stats = coachgg_report::aggregate(&data.matches, &data.counters);
            let json = serde_json::to_string_pretty(&stats).context("failed to serialize stats")?;
            println!("{json}");
        }
        Command::Overview { input } => {
            let data = coachgg_runner::load_bundle_from_path(&input)?;
            overview::print_overview(&data, &config);
        }
        Command::Preview { input } => {
            let data = coachgg_runner::load_bundle_from_path(&input)?;
            let report = build_report(&data, &config, Utc::now());
            print!("{}", report.render_text(&config));
        }
        Command::Export {
            input,
            out_dir,
            format,
            token,
        } => {
            let data = coachgg_runner::load_bundle_from_path(&input)?;
            let out_dir = out_dir.unwrap_or_else(|| {
                input
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."))
            });

            let mut session = Session::begin(data.profile.username.clone(), token, Utc::now());
            let result = coachgg_runner::export_report(
                &session,
                &data,
                &config,
                &out_dir,
                format,
                Utc::now(),
            );
            session.end(Utc::now())?;

            let path = result.with_context(|| format!("export failed: {}", input.display()))?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
