pub mod auth;
pub mod client;
pub mod follow;
pub mod users;

// 重新导出常用类型
pub use auth::{AuthApi, IdentityProvider};
pub use client::ApiClient;
pub use follow::{FollowApi, RelationshipFetcher};
pub use users::{UserDirectory, UsersApi};
