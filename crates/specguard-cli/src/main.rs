//! CLI entry point for specguard.
//!
//! This module handles argument parsing, I/O, logging setup and exit codes.
//! All business logic lives in the `specguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use specguard_app::{
    DescribeTarget, OutputFormat, ScenarioInput, ScenarioOutput, format_description,
    render_report, run_describe, run_insurance, run_registration, verdict_exit_code,
};
use specguard_settings::Overrides;
use time::OffsetDateTime;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "specguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "specguard",
    version,
    about = "Evaluate business-rule policies built from composable specifications"
)]
struct Cli {
    /// Path to specguard config TOML (default: ./specguard.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (standard|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override evaluation mode (fail-fast|all).
    #[arg(long, global = true)]
    mode: Option<String>,

    /// Report format (text|markdown|json).
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Write the report to a file instead of stdout.
    #[arg(long, global = true)]
    out: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate registration requests against the registration policy.
    Registration {
        /// JSON array of `{ "label", "context" }` cases; the built-in showcase runs without it.
        #[arg(long)]
        input: Option<Utf8PathBuf>,
    },

    /// Evaluate insurance claims against the policy for each claim type.
    Insurance {
        /// JSON array of `{ "label", "context" }` cases; the built-in showcase runs without it.
        #[arg(long)]
        input: Option<Utf8PathBuf>,
    },

    /// Show the specifications and structure of a policy.
    Describe {
        /// registration, medical, auto, property or life.
        policy: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("specguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config_text = load_config(cli.config.as_deref())?;
    let overrides = Overrides {
        profile: cli.profile.clone(),
        mode: cli.mode.clone(),
    };

    match &cli.cmd {
        Commands::Registration { input } => {
            let format: OutputFormat = cli.format.parse()?;
            let cases = read_input(input.as_deref())?;
            let output = run_registration(ScenarioInput {
                config_text: &config_text,
                overrides,
                cases_json: cases.as_deref(),
            })?;
            emit_report(cli, &output, format)
        }
        Commands::Insurance { input } => {
            let format: OutputFormat = cli.format.parse()?;
            let cases = read_input(input.as_deref())?;
            let today = OffsetDateTime::now_utc().date();
            let output = run_insurance(
                ScenarioInput {
                    config_text: &config_text,
                    overrides,
                    cases_json: cases.as_deref(),
                },
                today,
            )?;
            emit_report(cli, &output, format)
        }
        Commands::Describe { policy } => {
            let target: DescribeTarget = policy.parse()?;
            let description = run_describe(target, &config_text, overrides)?;
            write_output(cli.out.as_deref(), &format_description(&description))?;
            Ok(0)
        }
    }
}

/// An explicit `--config` must exist; the default path is optional.
fn load_config(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    match explicit {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG);
            if path.exists() {
                debug!(%path, "using default config");
                std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
            } else {
                Ok(String::new())
            }
        }
    }
}

fn read_input(path: Option<&Utf8Path>) -> anyhow::Result<Option<String>> {
    path.map(|p| std::fs::read_to_string(p).with_context(|| format!("read input: {p}")))
        .transpose()
}

fn emit_report(cli: &Cli, output: &ScenarioOutput, format: OutputFormat) -> anyhow::Result<i32> {
    let rendered = render_report(&output.report, format)?;
    write_output(cli.out.as_deref(), &rendered)?;
    Ok(verdict_exit_code(output.report.verdict))
}

fn write_output(path: Option<&Utf8Path>, text: &str) -> anyhow::Result<()> {
    let Some(path) = path else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write report: {path}"))?;
    Ok(())
}
