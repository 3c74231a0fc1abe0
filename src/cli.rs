use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linetally")]
#[command(about = "Grouped-sum aggregation and rule-table scoring over line-oriented text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum blank-line-separated groups of integers and report an aggregate
    Aggregate {
        /// Input file; `-` reads standard input
        path: PathBuf,

        /// How to reduce the group sums to one value
        #[arg(short, long, value_enum, default_value = "max")]
        mode: AggregateMode,

        /// Number of top groups to sum in `top` mode
        #[arg(long, default_value = "3")]
        top: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score two-token round lines against a fixed rule table
    Score {
        /// Input file; `-` reads standard input
        path: PathBuf,

        /// Reading of the second token
        #[arg(short, long, value_enum, default_value = "move")]
        table: TableVariant,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AggregateMode {
    /// Report the single largest group sum
    Max,
    /// Report the sum of the K largest group sums
    Top,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableVariant {
    /// Second token is the shape I play
    Move,
    /// Second token is the outcome I need
    Outcome,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<TableVariant> for crate::core::TableVariant {
    fn from(v: TableVariant) -> Self {
        match v {
            TableVariant::Move => crate::core::TableVariant::Move,
            TableVariant::Outcome => crate::core::TableVariant::Outcome,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl AggregateMode {
    /// Pair the CLI mode with its K to get the core mode.
    pub fn into_core(self, top: usize) -> crate::core::AggregateMode {
        match self {
            AggregateMode::Max => crate::core::AggregateMode::Max,
            AggregateMode::Top => crate::core::AggregateMode::Top(top),
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
