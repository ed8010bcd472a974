use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary followed by one block per slide
    Terminal,
    /// Pretty-printed JSON report
    Json,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "implmap")]
#[command(about = "Structural interface implementation mapper", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match types against interfaces and partition the result into slides
    Analyze {
        /// Symbol file (.json, .yaml or .yml) produced by a symbol provider
        symbols: PathBuf,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to the nearest .implmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Connection count at which an interface repeats on every slide
        #[arg(long, allow_negative_numbers = true)]
        hub_threshold: Option<i64>,

        /// Maximum number of types per slide
        #[arg(long, allow_negative_numbers = true)]
        chunk_size: Option<i64>,

        /// Only keep exported names
        #[arg(long)]
        exported_only: bool,

        /// Only keep user nodes under this package path prefix
        #[arg(long)]
        package_prefix: Option<String>,

        /// Drop standard-library interfaces
        #[arg(long)]
        no_stdlib: bool,

        /// Keep nodes that have no relation on their slide
        #[arg(long)]
        keep_orphans: bool,

        /// Match on a single thread
        #[arg(long)]
        no_parallel: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .implmap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
