pub mod follow;
pub mod plan;
pub mod response;
pub mod stats;
pub mod user;

// 重新导出常用类型
pub use follow::RelationKind;
pub use plan::{Plan, PublicPlan};
pub use response::ApiEnvelope;
pub use stats::ProfileStats;
pub use user::{CurrentUser, UserRecord, UserSummary};
