use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub genai: GenAiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenAiConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[genai]
endpoint = "https://generativelanguage.googleapis.com/v1beta"
model = "gemini-2.5-flash"
api_key = ""

[logging]
level = "debug"
"#;

/// Load configuration.
///
/// The bundle has no filesystem, so overrides come from the build
/// environment:
/// 1. `API_KEY`, `GENAI_MODEL`, `GENAI_ENDPOINT`, `LOG_LEVEL` at compile time
/// 2. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    apply_overrides(
        &mut config,
        option_env!("API_KEY"),
        option_env!("GENAI_MODEL"),
        option_env!("GENAI_ENDPOINT"),
        option_env!("LOG_LEVEL"),
    );
    Ok(config)
}

fn apply_overrides(
    config: &mut Config,
    api_key: Option<&str>,
    model: Option<&str>,
    endpoint: Option<&str>,
    level: Option<&str>,
) {
    if let Some(key) = api_key.filter(|v| !v.is_empty()) {
        config.genai.api_key = key.to_string();
    }
    if let Some(model) = model.filter(|v| !v.is_empty()) {
        config.genai.model = model.to_string();
    }
    if let Some(endpoint) = endpoint.filter(|v| !v.is_empty()) {
        config.genai.endpoint = endpoint.trim_end_matches('/').to_string();
    }
    if let Some(level) = level.filter(|v| !v.is_empty()) {
        config.logging.level = level.to_string();
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.genai.model, "gemini-2.5-flash");
        assert!(config.genai.api_key.is_empty());
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_overrides_replace_non_empty_values_only() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_overrides(
            &mut config,
            Some("secret"),
            Some(""),
            Some("http://localhost:8080/v1beta/"),
            Some("warn"),
        );
        assert_eq!(config.genai.api_key, "secret");
        assert_eq!(config.genai.model, "gemini-2.5-flash");
        assert_eq!(config.genai.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(config.logging.level(), log::Level::Warn);
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.level(), log::Level::Debug);
    }
}
