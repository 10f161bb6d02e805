pub mod explore;
pub mod profile;
pub mod relay;

// 重新导出常用类型
pub use explore::{
    ExploreService, ExploreSnapshot, FeedItems, FeedKind, PlanFeed, StaticPlanFeed, ViewMode,
};
pub use profile::{MyProfilePanel, PanelContent, ProfileTab, UserProfilePanel};
pub use relay::FollowActionRelay;
