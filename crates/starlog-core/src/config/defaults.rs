//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "starlog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "starlog.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".starlog.toml",
        ".starlog.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Starlog Configuration

[taxonomy]
major = []
minor = ["feat"]
patch = ["fix", "perf"]
fallback_category = "chore"

[changelog]
file = "CHANGELOG.md"
# project_link = "https://tracker.example.com/browse/"

[git]
# commits_url = "https://github.com/example/repo/commit/"
"#;
