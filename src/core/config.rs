use std::env;
use std::str::FromStr;

use anyhow::Context;

use crate::ai::extract::RefusalPolicy;
use crate::ai::request::GenerationConfig;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub region: String,
    pub model_id: String,
    /// Persistence is disabled when no table is configured.
    pub table_name: Option<String>,
    pub generation: GenerationConfig,
    pub refusals: RefusalPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads the config for a Lambda binary; failures read as startup errors.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(|name| env::var(name).ok())
    }

    pub fn load_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup)
            .map_err(anyhow::Error::msg)
            .context("invalid summarizer configuration")
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GenerationConfig::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let refusals = match non_empty("REFUSAL_PHRASES") {
            Some(raw) => RefusalPolicy::new(raw.split('|').map(str::trim)),
            None => RefusalPolicy::default(),
        };

        Ok(Self {
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: non_empty("BEDROCK_MODEL_ID")
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            table_name: non_empty("DYNAMODB_TABLE"),
            generation: GenerationConfig {
                max_token_count: parse_or(
                    non_empty("MAX_TOKEN_COUNT"),
                    "MAX_TOKEN_COUNT",
                    defaults.max_token_count,
                )?,
                temperature: parse_or(
                    non_empty("TEMPERATURE"),
                    "TEMPERATURE",
                    defaults.temperature,
                )?,
                top_p: parse_or(non_empty("TOP_P"), "TOP_P", defaults.top_p)?,
            },
            refusals,
        })
    }
}

fn parse_or<T>(raw: Option<String>, name: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| format!("{name}: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.model_id, "amazon.titan-text-express-v1");
        assert!(config.table_name.is_none());
        assert_eq!(config.generation, GenerationConfig::default());
        assert_eq!(config.refusals, RefusalPolicy::default());
    }

    #[test]
    fn overrides_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", "eu-west-2"),
            ("BEDROCK_MODEL_ID", "amazon.titan-text-lite-v1"),
            ("DYNAMODB_TABLE", "PatientReports"),
            ("MAX_TOKEN_COUNT", "256"),
            ("TEMPERATURE", "0.2"),
            ("TOP_P", "0.5"),
            ("REFUSAL_PHRASES", "I decline | not allowed"),
        ]))
        .unwrap();

        assert_eq!(config.region, "eu-west-2");
        assert_eq!(config.model_id, "amazon.titan-text-lite-v1");
        assert_eq!(config.table_name.as_deref(), Some("PatientReports"));
        assert_eq!(config.generation.max_token_count, 256);
        assert!((config.generation.temperature - 0.2).abs() < f32::EPSILON);
        assert!((config.generation.top_p - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.refusals.phrases(), ["i decline", "not allowed"]);
    }

    #[test]
    fn empty_table_name_disables_persistence() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("DYNAMODB_TABLE", "  ")])).unwrap();
        assert!(config.table_name.is_none());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("MAX_TOKEN_COUNT", "lots")])).unwrap_err();
        assert!(err.starts_with("MAX_TOKEN_COUNT:"));
    }

    #[test]
    fn load_reports_which_setting_failed() {
        let err = AppConfig::load_from(lookup_from(&[("TOP_P", "high")])).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("invalid summarizer configuration: TOP_P:"));
    }
}
