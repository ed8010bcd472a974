pub mod output;
pub mod symbols;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};
pub use symbols::{load_symbol_model, parse_symbol_model, SymbolFile, SymbolFormat};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
