use std::path::PathBuf;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Style catalog overriding the built-in tips (`FACESHAPE_TIPS_FILE`).
    pub tips_file: Option<PathBuf>,
    /// Output format (`FACESHAPE_OUTPUT`, default: text).
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from `FACESHAPE_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output = match lookup("FACESHAPE_OUTPUT") {
            Some(value) => OutputFormat::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "unrecognized FACESHAPE_OUTPUT, using text");
                OutputFormat::Text
            }),
            None => OutputFormat::Text,
        };

        Self {
            tips_file: lookup("FACESHAPE_TIPS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            output,
        }
    }

    /// Apply command-line overrides, which win over the environment.
    pub fn with_overrides(mut self, json: bool, tips_file: Option<PathBuf>) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        if tips_file.is_some() {
            self.tips_file = tips_file;
        }
        self
    }
}
