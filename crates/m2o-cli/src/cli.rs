//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "m2o",
    version,
    about = "Made-to-order configurator - assemble and export product variants",
    long_about = "Assemble valid product variants (product x upholstery type x upholstery \n\
                  color x optional base color) from a flat catalog and export the resolved \n\
                  rows into a column-templated spreadsheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the product families available in a catalog.
    Families(FamiliesArgs),

    /// Show the product x upholstery selection matrix for one family.
    Matrix(MatrixArgs),

    /// Execute a selection plan and export the resolved variants.
    Run(RunArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Path to the raw catalog CSV.
    #[arg(long = "catalog", value_name = "CSV")]
    pub catalog: PathBuf,

    /// Sales market to keep, or ALL for every row.
    #[arg(long = "market", value_name = "MARKET", default_value = "ALL")]
    pub market: String,
}

#[derive(Args)]
pub struct FamiliesArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Args)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Family to derive the matrix for.
    #[arg(value_name = "FAMILY")]
    pub family: String,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Path to the selection plan (JSON).
    #[arg(long = "plan", value_name = "JSON")]
    pub plan: PathBuf,

    /// Output column template CSV; the catalog's own columns when absent.
    #[arg(long = "template", value_name = "CSV")]
    pub template: Option<PathBuf>,

    /// Output file to write.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: OutputFormatArg,

    /// Worksheet name for xlsx output.
    #[arg(long = "sheet-name", value_name = "NAME", default_value = "Masterdata")]
    pub sheet_name: String,

    /// Resolve and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xlsx,
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
