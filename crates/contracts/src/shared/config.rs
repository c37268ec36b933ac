use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub app: AppConfig,
    pub theme: ThemeConfig,
    pub orders: OrdersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Brand shown in the sidebar.
    pub brand: String,
    /// `log` level name for the browser console: error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "ByeWind".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme at startup; the theme is never persisted.
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    /// Simulated latency of the initial order list load.
    pub load_delay_ms: u32,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 1000,
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
brand = "ByeWind"
log_level = "debug"

[theme]
dark_mode = false

[orders]
load_delay_ms = 1000
"#;

/// Parse a configuration document; keys it leaves out keep their defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration.
///
/// Search order:
/// 1. The override document (the frontend passes its build-time `dashboard.toml`)
/// 2. Falls back to the embedded default config
pub fn load_config(override_contents: Option<&str>) -> anyhow::Result<DashboardConfig> {
    match override_contents {
        Some(contents) if !contents.trim().is_empty() => parse_config(contents),
        _ => parse_config(DEFAULT_CONFIG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.app.brand, "ByeWind");
        assert_eq!(config.orders.load_delay_ms, 1000);
        assert!(!config.theme.dark_mode);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[theme]\ndark_mode = true\n")).unwrap();
        assert!(config.theme.dark_mode);
        assert_eq!(config.app.log_level, "debug");
        assert_eq!(config.orders.load_delay_ms, 1000);
    }

    #[test]
    fn test_blank_override_uses_default() {
        let config = load_config(Some("   \n")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(load_config(Some("[orders]\nload_delay_ms = \"soon\"\n")).is_err());
    }
}
