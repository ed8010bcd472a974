mod core;
mod loader;
mod thresholds;

pub use self::core::{ImplmapConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{MatcherConfig, PartitionConfig};

/// Commented default written by `implmap init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# implmap configuration

[partition]
# Interfaces implemented at least this many times repeat on every slide.
hub_threshold = 3
# Maximum number of types per slide.
chunk_size = 3
# Hide attached interfaces and types left without relations on a slide.
prune_orphans = true

[filter]
exported_only = false
# package_prefix = "example.com/app"
include_stdlib = true

[matcher]
parallel = true

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::OutputFormat;
    use crate::partition::PartitionParams;
    use indoc::indoc;
    use std::fs;

    #[test]
    fn test_default_template_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.partition(), PartitionConfig::default());
        assert_eq!(config.output_format(), OutputFormat::Terminal);
        assert!(config.matcher().parallel);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, ImplmapConfig::default());
        assert_eq!(config.analysis_options().partition, PartitionParams::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [partition]
            hub_threshold = 5
            chunk_size = 4
            prune_orphans = false

            [filter]
            exported_only = true
            package_prefix = "example.com/app"
            include_stdlib = false

            [matcher]
            parallel = false

            [output]
            default_format = "json"
        "#})
        .unwrap();

        let options = config.analysis_options();
        assert_eq!(options.partition, PartitionParams::new(5, 4));
        assert!(!options.prune_orphans);
        assert!(!options.matcher.parallel);
        assert!(options.filter.exported_only);
        assert!(!options.filter.include_stdlib);
        assert_eq!(
            options.filter.package_prefix.as_deref(),
            Some("example.com/app")
        );
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_blank_prefix_is_rejected() {
        let result = parse_and_validate_config("[filter]\npackage_prefix = \"  \"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse_and_validate_config("[partition\nchunk_size = 1").is_err());
    }

    #[test]
    fn test_directory_ancestors_is_bounded() {
        let ancestors: Vec<_> =
            directory_ancestors(std::path::PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[2], std::path::PathBuf::from("/a/b"));
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let root = tempfile::TempDir::new().unwrap();
        let nested = root.path().join("pkg").join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[partition]\nchunk_size = 7\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.partition().chunk_size, 7);
    }

    #[test]
    fn test_discover_config_skips_invalid_file() {
        let root = tempfile::TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        let config = discover_config(root.path().to_path_buf());
        // The temp dir's ancestors are not expected to carry an implmap config.
        assert_eq!(config.partition().chunk_size, 3);
    }

    #[test]
    fn test_load_config_from_reports_errors() {
        let root = tempfile::TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(&path, "[matcher]\nparallel = \"yes\"\n").unwrap();
        assert!(load_config_from(&path).is_err());
        assert!(load_config_from(&root.path().join("missing.toml")).is_err());
    }
}
