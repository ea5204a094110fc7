pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::http::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
#[cfg(feature = "cli")]
use crate::app::theme::Theme;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "poke-lookup")]
#[command(about = "Look up a Pokémon by name or ID from the PokéAPI")]
pub struct CliConfig {
    /// Base endpoint; the query is appended as the last path segment
    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Theme at startup (not remembered between runs)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Write an HTML snapshot of the page to this file after every change
    #[arg(long)]
    pub html: Option<String>,

    /// Run a single lookup and exit
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔中的值
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(endpoint) = &self.api_endpoint {
            tracing::debug!("🔧 Endpoint overridden to: {}", endpoint);
            config.source.endpoint = endpoint.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.source.user_agent = Some(user_agent.clone());
        }
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
        if let Some(html) = &self.html {
            config.ui.snapshot_path = Some(html.clone());
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn snapshot_path(&self) -> Option<&str> {
        self.html.as_deref()
    }

    fn initial_theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", self.api_endpoint())?;
        validation::validate_non_empty_string("user_agent", self.user_agent())?;
        if let Some(path) = self.snapshot_path() {
            validation::validate_path("html", path)?;
        }
        if let Some(query) = &self.query {
            validation::validate_non_empty_string("query", query)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "poke-lookup",
            "--theme",
            "dark",
            "--html",
            "./page.html",
            "-q",
            "pikachu",
        ]);

        assert_eq!(config.initial_theme(), Theme::Dark);
        assert_eq!(config.snapshot_path(), Some("./page.html"));
        assert_eq!(config.query.as_deref(), Some("pikachu"));
        assert_eq!(config.api_endpoint(), DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_query_is_invalid() {
        let config = CliConfig::parse_from(["poke-lookup", "--query", "   "]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut settings = TomlConfig::default();
        settings.ui.theme = Theme::Dark;

        let cli = CliConfig::parse_from([
            "poke-lookup",
            "--api-endpoint",
            "http://localhost:9000/pokemon",
            "--theme",
            "light",
        ]);
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.source.endpoint, "http://localhost:9000/pokemon");
        assert_eq!(settings.ui.theme, Theme::Light);
        assert_eq!(settings.ui.snapshot_path, None);
    }
}
