use crate::{
    api::client::ApiClient,
    error::Result,
    models::{RelationKind, UserRecord},
};
use async_trait::async_trait;
use tracing::debug;

/// 关系列表接口。纯I/O适配器，不做缓存，
/// 返回顺序与服务端一致。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationshipFetcher: Send + Sync {
    async fn fetch(&self, kind: RelationKind, profile_id: &str) -> Result<Vec<UserRecord>>;
}

#[derive(Debug, Clone)]
pub struct FollowApi {
    client: ApiClient,
}

impl FollowApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_followers(&self, profile_id: &str) -> Result<Vec<UserRecord>> {
        self.fetch(RelationKind::Followers, profile_id).await
    }

    pub async fn get_followings(&self, profile_id: &str) -> Result<Vec<UserRecord>> {
        self.fetch(RelationKind::Followings, profile_id).await
    }
}

#[async_trait]
impl RelationshipFetcher for FollowApi {
    async fn fetch(&self, kind: RelationKind, profile_id: &str) -> Result<Vec<UserRecord>> {
        debug!("Fetching {} for profile {}", kind, profile_id);

        let records = self
            .client
            .get_result::<Vec<UserRecord>>(&format!(
                "follows/{}/{}",
                profile_id,
                kind.path_segment()
            ))
            .await?
            .unwrap_or_default();

        Ok(records)
    }
}
