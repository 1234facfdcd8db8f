use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vivado_report::{ReportKind, TableKind};

#[derive(Parser, Debug)]
#[command(
    name = "vivado-report",
    version,
    about = "Extract the tables of Vivado report files as JSON"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a whole report, choosing the parser from its header.
    Parse(ParseArgs),
    /// Print the metadata header of a report.
    Metadata(MetadataArgs),
    /// List the titles of sections that carry a table.
    Sections(SectionsArgs),
    /// Extract data path delays from a timing report.
    Timing(TimingArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Report file to read; standard input when omitted.
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// File to which output should be written; standard output when omitted.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Parse as this kind instead of reading the generating command.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    #[arg(long, value_enum, default_value_t = AmbiguousAs::Dictionary)]
    pub ambiguous_as: AmbiguousAs,
}

#[derive(Args, Debug, Clone)]
pub struct MetadataArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Print only the name of the command that generated the report.
    #[arg(long, default_value_t = false)]
    pub command_only: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SectionsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TimingArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AmbiguousAs {
    Dictionary,
    Record,
}

impl From<AmbiguousAs> for TableKind {
    fn from(value: AmbiguousAs) -> Self {
        match value {
            AmbiguousAs::Dictionary => TableKind::Dictionary,
            AmbiguousAs::Record => TableKind::Record,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    Utilization,
    Power,
}

impl From<KindArg> for ReportKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Utilization => ReportKind::Utilization,
            KindArg::Power => ReportKind::Power,
        }
    }
}
