use anyhow::Result;
use clap::Parser;
use implmap::cli::{Cli, Commands};
use implmap::commands::{self, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbols,
            format,
            output,
            config,
            hub_threshold,
            chunk_size,
            exported_only,
            package_prefix,
            no_stdlib,
            keep_orphans,
            no_parallel,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_analyze(AnalyzeConfig {
                symbols,
                format: format.map(Into::into),
                output,
                config,
                hub_threshold,
                chunk_size,
                exported_only,
                package_prefix,
                no_stdlib,
                keep_orphans,
                no_parallel,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}

// RUST_LOG wins over -v when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
