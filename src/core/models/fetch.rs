//! Fetch the model catalog from the Gemini API (all pages).

use reqwest::Client;

use crate::core::app;
use crate::core::config::Config;

use super::error::{self, CatalogError};
use super::info::{ListModelsPage, ModelDescriptor};

/// Source of model descriptors. The report logic only talks to this.
pub trait CatalogSource {
    /// Every descriptor visible to the caller, in service order.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CatalogError>;
}

/// `models.list` over REST, authenticated with an API key.
pub struct GeminiCatalog {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl GeminiCatalog {
    /// Build the HTTP client. No timeout is set: latency is bounded by the service.
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let client = Client::builder().user_agent(app::user_agent()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key().to_string(),
            page_size: config.page_size,
        })
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListModelsPage, CatalogError> {
        let mut request = self
            .client
            .get(self.models_url())
            .header("x-goog-api-key", &self.api_key)
            .query(&[("pageSize", self.page_size.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(error::api_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl CatalogSource for GeminiCatalog {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CatalogError> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            log::debug!(
                "GET {} (page {}, pageSize={})",
                self.models_url(),
                pages + 1,
                self.page_size
            );
            let page = self.fetch_page(page_token.as_deref()).await?;
            pages += 1;
            models.extend(page.models);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        log::info!("Fetched {} model(s) in {} page(s)", models.len(), pages);
        Ok(models)
    }
}
