use serde::{Deserialize, Serialize};

/// 宿主页面持有的档案统计。
/// 计数只通过关注切换的增量更新，从不由列表重新统计；
/// 列表与计数在下一次标签激活前允许出现偏差。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub followers: u64,
    pub followings: u64,
    pub public_plans: u64,
}

impl ProfileStats {
    /// 应用一次关注切换产生的 follower 增量，下限为零
    pub fn record_follower_delta(&mut self, now_following: bool) {
        self.followers = if now_following {
            self.followers + 1
        } else {
            self.followers.saturating_sub(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_increments_counter() {
        let mut stats = ProfileStats {
            followers: 3,
            ..Default::default()
        };
        stats.record_follower_delta(true);
        assert_eq!(stats.followers, 4);
    }

    #[test]
    fn unfollow_floors_at_zero() {
        let mut stats = ProfileStats::default();
        stats.record_follower_delta(false);
        assert_eq!(stats.followers, 0);
    }
}
