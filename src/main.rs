//! workboard: workforce governance analytics dashboard
//!
//! Filterable, sortable terminal views over precomputed HR metrics, with
//! CSV export.

#![allow(clippy::too_many_lines)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use workboard::config::{
    parse_dataset_kind, parse_recruitment_sort, DashConfig, ExportConfig, SummaryConfig,
    SummaryFormat, DEFAULT_DATA_DIR,
};
use workboard::model::DatasetKind;
use workboard::view::RecruitmentSort;
use workboard::{cli, cli::exit_codes};

/// Build long version string with dataset info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput datasets (CSV, under the data directory):",
        "\n  recruitment_source_summary.csv  manager_summary.csv",
        "\n  turnover_by_dept.csv            salary_grid.csv",
        "\n\nViews:",
        "\n  recruitment, managers, turnover, salary",
        "\n\nFeatures:",
        "\n  Filter multiselect, descending sorts, risk-banded tables, CSV export"
    )
}

#[derive(Parser)]
#[command(name = "workboard")]
#[command(version, long_version = build_long_version())]
#[command(about = "Workforce governance analytics dashboard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  All requested datasets absent
    2  Error occurred

EXAMPLES:
    # Interactive dashboard over ./output
    workboard

    # Dashboard over another data directory
    workboard --data-dir /srv/hr/output dash

    # Export every present view, filtered and sorted
    workboard export --department Sales --department Support --out-dir /tmp

    # Export one view with a specific recruitment sort
    workboard export --tab recruitment --sort tenure

    # Dataset counters for scripting
    workboard summary --format json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory containing the input datasets
    #[arg(long, global = true, env = "WORKBOARD_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `dash` subcommand
#[derive(Parser)]
struct DashArgs {
    /// Directory CSV exports are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,
}

/// Arguments for the `export` subcommand
#[derive(Parser)]
struct ExportArgs {
    /// Export a single view (recruitment, managers, turnover, salary)
    #[arg(long, value_parser = parse_dataset_kind)]
    tab: Option<DatasetKind>,

    /// Output directory
    #[arg(short = 'O', long, default_value = ".")]
    out_dir: PathBuf,

    /// Keep only these recruitment sources. Can be repeated.
    #[arg(long = "source", value_name = "NAME")]
    sources: Vec<String>,

    /// Keep only these managers. Can be repeated.
    #[arg(long = "manager", value_name = "NAME")]
    managers: Vec<String>,

    /// Keep only these departments. Can be repeated.
    #[arg(long = "department", value_name = "NAME")]
    departments: Vec<String>,

    /// Recruitment sort key (index, tenure, perf)
    #[arg(long, default_value = "index", value_parser = parse_recruitment_sort)]
    sort: RecruitmentSort,
}

/// Arguments for the `summary` subcommand
#[derive(Parser)]
struct SummaryArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text", value_parser = parse_summary_format)]
    format: SummaryFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive dashboard (default)
    Dash(DashArgs),

    /// Write the per-view CSV exports non-interactively
    Export(ExportArgs),

    /// Print the dataset summary counters
    Summary(SummaryArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn parse_summary_format(s: &str) -> Result<SummaryFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(SummaryFormat::Text),
        "json" => Ok(SummaryFormat::Json),
        other => Err(format!("unknown format '{other}' (expected text or json)")),
    }
}

fn init_tracing(verbose: bool, quiet: bool, interactive: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else if interactive {
        // Keep stderr quiet underneath the TUI
        "warn"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or(Commands::Dash(DashArgs {
        export_dir: PathBuf::from("."),
    }));

    let interactive = matches!(command, Commands::Dash(_));
    if !matches!(command, Commands::Completions { .. }) {
        init_tracing(cli.verbose, cli.quiet, interactive);
    }

    match command {
        Commands::Dash(args) => cli::run_dash(DashConfig {
            data_dir: cli.data_dir,
            export_dir: args.export_dir,
        }),

        Commands::Export(args) => cli::run_export(ExportConfig {
            data_dir: cli.data_dir,
            out_dir: args.out_dir,
            tab: args.tab,
            sources: args.sources,
            managers: args.managers,
            departments: args.departments,
            recruitment_sort: args.sort,
        }),

        Commands::Summary(args) => cli::run_summary(SummaryConfig {
            data_dir: cli.data_dir,
            format: args.format,
        }),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "workboard", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}
