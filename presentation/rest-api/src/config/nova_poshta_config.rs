use anyhow::bail;

/// Configuration for Nova Poshta API access.
///
/// Environment variables:
/// - NOVA_POSHTA_API_KEY: API key sent with every request (required)
/// - NOVA_POSHTA_API_URL: Endpoint override (default: public JSON endpoint)
#[derive(Debug, Clone)]
pub struct NovaPoshtaConfig {
    pub api_key: String,
    pub api_url: Option<String>,
}

impl NovaPoshtaConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("NOVA_POSHTA_API_KEY").ok(),
            std::env::var("NOVA_POSHTA_API_URL").ok(),
        )
    }

    fn from_values(api_key: Option<String>, api_url: Option<String>) -> anyhow::Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => bail!("NOVA_POSHTA_API_KEY must be set"),
        };
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self { api_key, api_url })
    }
}
