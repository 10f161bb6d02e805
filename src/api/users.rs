use crate::{api::client::ApiClient, error::Result, models::UserRecord};
use async_trait::async_trait;
use tracing::debug;

/// 用户目录接口，一次性返回全量列表
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>>;
}

#[derive(Debug, Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for UsersApi {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        debug!("Fetching full user directory");

        let records = self
            .client
            .get_result::<Vec<UserRecord>>("users")
            .await?
            .unwrap_or_default();

        Ok(records)
    }
}
