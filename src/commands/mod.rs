//! CLI command implementations.
//!
//! - **analyze**: match, filter and partition a symbol file into slides
//! - **init**: write a default `.implmap.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
