use crate::domain::model::LookupResult;
use crate::domain::ports::{ConfigProvider, LookupSource};
use crate::utils::error::{LookupError, Result};
use reqwest::{Client, StatusCode};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_USER_AGENT: &str = concat!("poke-lookup/", env!("CARGO_PKG_VERSION"));

/// PokéAPI 的 HTTP 查詢來源
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    endpoint: Url,
}

impl PokeApiClient {
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| LookupError::InvalidConfigValueError {
            field: "api_endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if endpoint.cannot_be_a_base() {
            return Err(LookupError::InvalidConfigValueError {
                field: "api_endpoint".to_string(),
                value: endpoint.to_string(),
                reason: "URL cannot be used as a base for lookups".to_string(),
            });
        }

        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.user_agent())
    }

    /// 把查詢字串接成端點路徑的最後一段（會做百分比編碼）
    pub fn lookup_url(&self, query: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| LookupError::ConfigError {
                    message: format!("Endpoint '{}' cannot take path segments", self.endpoint),
                })?;
            segments.pop_if_empty().push(query);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl LookupSource for PokeApiClient {
    async fn lookup(&self, query: &str) -> Result<LookupResult> {
        let url = self.lookup_url(query)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                query: query.to_string(),
            });
        }

        if !status.is_success() {
            return Err(LookupError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let result: LookupResult = serde_json::from_slice(&body)?;

        tracing::debug!("Decoded record #{} ({})", result.id, result.name);
        Ok(result)
    }
}
