use crate::{
    api::client::ApiClient,
    error::{AppError, Result},
    models::CurrentUser,
};
use async_trait::async_trait;
use tracing::debug;

/// 身份接口。失败由调用方按匿名状态处理，不是致命错误。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Result<CurrentUser>;
}

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for AuthApi {
    async fn current_user(&self) -> Result<CurrentUser> {
        debug!("Fetching current user info");

        self.client
            .get_result::<CurrentUser>("users/myInfo")
            .await?
            .ok_or_else(|| AppError::unauthorized("No user info in response"))
    }
}
