use reqwest::Client;
use serde_json::{Value, json};

use business::domain::shipping::errors::ShippingError;

pub const DEFAULT_API_URL: &str = "https://api.novaposhta.ua/v2.0/json/";

/// Shared Nova Poshta HTTP client configuration.
pub struct NovaPoshtaClient {
    pub client: Client,
    pub api_key: String,
    pub api_url: String,
}

impl NovaPoshtaClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Points the client at another endpoint (sandbox, proxy).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Every Nova Poshta call is the same envelope posted to one endpoint.
    pub fn request_body(&self, model_name: &str, called_method: &str, properties: Value) -> Value {
        json!({
            "apiKey": self.api_key,
            "modelName": model_name,
            "calledMethod": called_method,
            "methodProperties": properties,
        })
    }

    /// Posts a call and returns the raw response body.
    pub async fn call(
        &self,
        model_name: &str,
        called_method: &str,
        properties: Value,
    ) -> Result<String, ShippingError> {
        let body = self.request_body(model_name, called_method, properties);

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Nova Poshta {model_name}/{called_method} request failed: {e}");
                ShippingError::RequestFailed
            })?;

        if !response.status().is_success() {
            tracing::error!(
                "Nova Poshta {model_name}/{called_method} answered {}",
                response.status()
            );
            return Err(ShippingError::RequestFailed);
        }

        response.text().await.map_err(|e| {
            tracing::error!("Nova Poshta {model_name}/{called_method} body unreadable: {e}");
            ShippingError::RequestFailed
        })
    }
}
