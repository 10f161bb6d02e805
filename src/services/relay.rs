use crate::models::ProfileStats;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// 把列表卡片里的关注切换回传到宿主页面的统计计数。
/// 只做计数增量，从不触发列表重新拉取；
/// 列表与计数允许在下一次标签激活前不一致。
#[derive(Clone)]
pub struct FollowActionRelay {
    stats: Arc<RwLock<ProfileStats>>,
}

impl FollowActionRelay {
    pub fn new(stats: Arc<RwLock<ProfileStats>>) -> Self {
        Self { stats }
    }

    pub async fn apply(&self, user_id: &str, now_following: bool) {
        debug!(
            "Follow toggle for user {}: now_following={}",
            user_id, now_following
        );

        let mut stats = self.stats.write().await;
        stats.record_follower_delta(now_following);
    }
}
