use crate::{
    config::Config,
    error::{AppError, Result},
    models::ApiEnvelope,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, warn};
use url::Url;

/// 网关HTTP客户端，所有接口适配器共享同一个连接池
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        // 末尾补斜杠，保证 Url::join 以目录语义拼接
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| AppError::Internal(format!("Invalid API base URL: {}", e)))?;

        Ok(Self {
            http_client,
            base_url,
            bearer_token: config.auth_bearer_token.clone(),
        })
    }

    /// GET 请求并解开 { "result": ... } 信封
    pub(crate) async fn get_result<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::Internal(format!("Invalid request path '{}': {}", path, e)))?;

        let mut request = self.http_client.get(url.clone());
        if let Some(token) = &self.bearer_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            AppError::ExternalService(format!("Request to gateway failed: {}", e))
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found("Resource"));
        }
        if !response.status().is_success() {
            warn!("Gateway returned error status {} for {}", response.status(), url);
            return Err(AppError::ExternalService(format!(
                "Gateway returned status {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
            error!("Failed to parse gateway response from {}: {}", url, e);
            AppError::ExternalService("Invalid response from gateway".to_string())
        })?;

        Ok(envelope.result)
    }
}
