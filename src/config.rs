// Run configuration, read once at startup and passed by reference to each stage.

use std::env;
use std::path::PathBuf;

use crate::cli::{Args, ProviderKind, TestFramework};

pub const DEFAULT_SPEC_LOCATION: &str = "swagger.json";

pub const ANTHROPIC_DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Endpoint and model for a single provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL or file path of the specification document
    pub swagger_url: String,

    /// Explicit output directory; the framework default is used when absent
    pub output_dir: Option<PathBuf>,

    pub framework: TestFramework,

    pub preferred_provider: ProviderKind,

    pub anthropic: ProviderSettings,

    pub openai: ProviderSettings,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            swagger_url: get("SWAGGER_URL").unwrap_or_else(|| DEFAULT_SPEC_LOCATION.to_string()),
            output_dir: get("OUTPUT_DIR").map(PathBuf::from),
            framework: TestFramework::Cypress,
            preferred_provider: ProviderKind::Anthropic,
            anthropic: ProviderSettings {
                api_key: get("ANTHROPIC_API_KEY"),
                base_url: get("ANTHROPIC_BASE_URL")
                    .unwrap_or_else(|| ANTHROPIC_DEFAULT_BASE_URL.to_string()),
                model: get("ANTHROPIC_MODEL").unwrap_or_else(|| ANTHROPIC_DEFAULT_MODEL.to_string()),
            },
            openai: ProviderSettings {
                api_key: get("OPENAI_API_KEY"),
                base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| OPENAI_DEFAULT_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string()),
            },
        }
    }

    /// Apply command line overrides on top of the environment values
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(input) = &args.input {
            self.swagger_url = input.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        self.framework = args.framework;
        self.preferred_provider = args.provider;
        self
    }

    /// Directory the generated suites are written to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.framework.default_output_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.swagger_url, DEFAULT_SPEC_LOCATION);
        assert_eq!(config.anthropic.api_key, None);
        assert_eq!(config.anthropic.model, ANTHROPIC_DEFAULT_MODEL);
        assert_eq!(config.openai.base_url, OPENAI_DEFAULT_BASE_URL);
        assert_eq!(config.output_dir(), PathBuf::from("cypress").join("e2e"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("ANTHROPIC_API_KEY", ""), ("OPENAI_API_KEY", "sk-test")]));

        assert_eq!(config.anthropic.api_key, None);
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn command_line_overrides_environment() {
        let config = Config::from_lookup(lookup(&[
            ("SWAGGER_URL", "https://example.com/swagger.json"),
            ("OUTPUT_DIR", "from-env"),
        ]));
        let args = Args::parse_from([
            "swagger-ai-testgen",
            "--input",
            "local.yaml",
            "--framework",
            "jest",
            "--provider",
            "openai",
        ]);

        let config = config.with_args(&args);

        assert_eq!(config.swagger_url, "local.yaml");
        assert_eq!(config.output_dir(), PathBuf::from("from-env"));
        assert_eq!(config.framework, TestFramework::Jest);
        assert_eq!(config.preferred_provider, ProviderKind::OpenAi);
    }
}
