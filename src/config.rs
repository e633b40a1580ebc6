use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Discord webhook that receives the summary embed
    #[serde(default)]
    pub discord_webhook_url: Option<String>,

    /// Catalog GraphQL endpoint
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Optional proxy for catalog requests (applied to http and https)
    #[serde(default)]
    pub catalog_proxy: Option<String>,

    /// Verify TLS certificates on catalog requests
    #[serde(default)]
    pub catalog_verify_tls: bool,

    /// Catalog country code
    #[serde(default = "default_country")]
    pub catalog_country: String,

    /// Catalog language code
    #[serde(default = "default_language")]
    pub catalog_language: String,

    /// Titles requested per page
    #[serde(default = "default_page_size")]
    pub catalog_page_size: u32,

    /// Directory the fetched titles are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_catalog_api_url() -> String {
    "https://apis.justwatch.com/graphql".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_page_size() -> u32 {
    50
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Webhook URL, treating an empty value as unset
    pub fn webhook_url(&self) -> Option<&str> {
        self.discord_webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
