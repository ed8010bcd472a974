use crate::config::{self, ImplmapConfig};
use crate::io::{self, OutputFormat};
use crate::pipeline::{self, AnalysisOptions, AnalysisReport};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Resolved `analyze` invocation: CLI flags before config defaults.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub symbols: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub hub_threshold: Option<i64>,
    pub chunk_size: Option<i64>,
    pub exported_only: bool,
    pub package_prefix: Option<String>,
    pub no_stdlib: bool,
    pub keep_orphans: bool,
    pub no_parallel: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = load_file_config(&config)?;
    let options = build_options(&config, &file_config);
    let format = config
        .format
        .unwrap_or_else(|| file_config.output_format());

    let model = io::load_symbol_model(&config.symbols)?;
    let report = pipeline::analyze(&model, &options);

    write_report(&report, format, config.output.as_ref())
}

fn load_file_config(config: &AnalyzeConfig) -> Result<ImplmapConfig> {
    match &config.config {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

/// Pure function merging CLI overrides onto the file configuration
pub fn build_options(cli: &AnalyzeConfig, file_config: &ImplmapConfig) -> AnalysisOptions {
    let mut options = file_config.analysis_options();
    let partition = file_config.partition();

    options.partition = crate::partition::PartitionParams::new(
        cli.hub_threshold.unwrap_or(partition.hub_threshold),
        cli.chunk_size.unwrap_or(partition.chunk_size),
    );
    if cli.keep_orphans {
        options.prune_orphans = false;
    }
    if cli.no_parallel {
        options.matcher.parallel = false;
    }
    if cli.exported_only {
        options.filter.exported_only = true;
    }
    if cli.no_stdlib {
        options.filter.include_stdlib = false;
    }
    if let Some(prefix) = &cli.package_prefix {
        options.filter.package_prefix = Some(prefix.clone());
    }
    options
}

fn write_report(
    report: &AnalysisReport,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            io::create_writer(format, BufWriter::new(file)).write_report(report)?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            io::create_writer(format, stdout.lock()).write_report(report)?;
        }
    }
    Ok(())
}
