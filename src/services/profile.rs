use crate::{
    api::RelationshipFetcher,
    models::{PublicPlan, RelationKind, UserSummary},
    services::relay::FollowActionRelay,
};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// 个人主页内容区的标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    PublicPlans,
    Followings,
    Followers,
}

impl ProfileTab {
    fn relation_kind(&self) -> Option<RelationKind> {
        match self {
            ProfileTab::PublicPlans => None,
            ProfileTab::Followings => Some(RelationKind::Followings),
            ProfileTab::Followers => Some(RelationKind::Followers),
        }
    }
}

/// 内容区的渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Loading,
    Error(String),
    Empty { message: String, hint: String },
    PublicPlans(Vec<PublicPlan>),
    Users(Vec<UserSummary>),
}

#[derive(Debug)]
struct PanelState {
    active_tab: ProfileTab,
    followers: Vec<UserSummary>,
    followings: Vec<UserSummary>,
    loading: bool,
    error: Option<String>,
    // 每次激活递增；完成回调发现纪元已变则丢弃结果
    epoch: u64,
}

impl PanelState {
    fn new() -> Self {
        Self {
            active_tab: ProfileTab::PublicPlans,
            followers: Vec::new(),
            followings: Vec::new(),
            loading: false,
            error: None,
            epoch: 0,
        }
    }
}

/// 两个面板变体共用的标签状态机。
/// 切换到关系标签时重新拉取（不做缓存），切回旧标签同样重新拉取，
/// 这是沿用的设计选择，不要当成缺陷修掉。
struct ProfilePanelCore {
    fetcher: Arc<dyn RelationshipFetcher>,
    profile_id: Option<String>,
    state: Arc<RwLock<PanelState>>,
}

impl ProfilePanelCore {
    fn new(fetcher: Arc<dyn RelationshipFetcher>, profile_id: Option<String>) -> Self {
        Self {
            fetcher,
            profile_id,
            state: Arc::new(RwLock::new(PanelState::new())),
        }
    }

    async fn activate_tab(&self, tab: ProfileTab) {
        let epoch = {
            let mut state = self.state.write().await;
            state.active_tab = tab;
            state.epoch += 1;
            // 非关系标签没有归属的在途请求，加载与错误标记一并复位，
            // 否则被作废的完成回调会让 loading 悬置
            if tab.relation_kind().is_none() {
                state.loading = false;
                state.error = None;
            }
            state.epoch
        };

        // 只有在知道档案ID且处于关系标签时才发起请求
        let kind = match tab.relation_kind() {
            Some(kind) => kind,
            None => return,
        };
        let profile_id = match &self.profile_id {
            Some(id) => id.clone(),
            None => return,
        };

        {
            let mut state = self.state.write().await;
            if state.epoch != epoch {
                return;
            }
            state.loading = true;
            state.error = None;
        }

        let result = self.fetcher.fetch(kind, &profile_id).await;

        let mut state = self.state.write().await;
        // 用户已切走或面板已卸载，丢弃过期结果
        if state.epoch != epoch {
            return;
        }

        match result {
            Ok(records) => {
                let summaries: Vec<UserSummary> =
                    records.into_iter().map(UserSummary::from).collect();
                match kind {
                    RelationKind::Followers => state.followers = summaries,
                    RelationKind::Followings => state.followings = summaries,
                }
                state.error = None;
            }
            Err(err) => {
                warn!("Failed to load {} for profile {}: {}", kind, profile_id, err);
                state.error = Some(kind.load_error_message());
            }
        }
        state.loading = false;
    }

    /// 面板卸载：作废所有在途请求
    async fn deactivate(&self) {
        let mut state = self.state.write().await;
        state.epoch += 1;
        state.loading = false;
    }

    async fn active_tab(&self) -> ProfileTab {
        self.state.read().await.active_tab
    }
}

fn empty_state(message: &str, hint: &str) -> PanelContent {
    PanelContent::Empty {
        message: message.to_string(),
        hint: hint.to_string(),
    }
}

/// 自己主页的内容面板。
/// 关注切换通过 FollowActionRelay 回写宿主页面的统计。
pub struct MyProfilePanel {
    core: ProfilePanelCore,
    relay: FollowActionRelay,
    // 公开计划目前还是静态占位数据
    public_plans: Vec<PublicPlan>,
}

impl MyProfilePanel {
    pub fn new(
        fetcher: Arc<dyn RelationshipFetcher>,
        profile_id: Option<String>,
        relay: FollowActionRelay,
    ) -> Self {
        Self {
            core: ProfilePanelCore::new(fetcher, profile_id),
            relay,
            public_plans: Vec::new(),
        }
    }

    pub async fn activate_tab(&self, tab: ProfileTab) {
        self.core.activate_tab(tab).await;
    }

    pub async fn deactivate(&self) {
        self.core.deactivate().await;
    }

    pub async fn active_tab(&self) -> ProfileTab {
        self.core.active_tab().await
    }

    /// 卡片上的关注切换。只有在 Followers 标签下才影响自己的
    /// follower 计数；Followings 标签下的切换不触碰它。
    pub async fn on_follow_toggle(&self, user_id: &str, now_following: bool) {
        if self.core.active_tab().await == ProfileTab::Followers {
            self.relay.apply(user_id, now_following).await;
        }
        // 需要联动自己的 followings 计数时在这里补充
    }

    pub async fn content(&self) -> PanelContent {
        let state = self.core.state.read().await;

        // 加载与错误提示只针对关系标签
        if matches!(
            state.active_tab,
            ProfileTab::Followers | ProfileTab::Followings
        ) {
            if state.loading {
                return PanelContent::Loading;
            }
            if let Some(error) = &state.error {
                return PanelContent::Error(error.clone());
            }
        }

        match state.active_tab {
            ProfileTab::PublicPlans => {
                if self.public_plans.is_empty() {
                    empty_state(
                        "No public plans yet",
                        "Create and publish plans to showcase them here",
                    )
                } else {
                    PanelContent::PublicPlans(self.public_plans.clone())
                }
            }
            ProfileTab::Followings => {
                if state.followings.is_empty() {
                    empty_state("Not following anyone yet", "Explore and follow other users")
                } else {
                    PanelContent::Users(state.followings.clone())
                }
            }
            ProfileTab::Followers => {
                if state.followers.is_empty() {
                    empty_state("No followers yet", "Share your profile to gain more followers")
                } else {
                    PanelContent::Users(state.followers.clone())
                }
            }
        }
    }
}

/// 他人主页 Public Plans 标签的静态占位数据
static MOCK_USER_PUBLIC_PLANS: Lazy<Vec<PublicPlan>> = Lazy::new(|| {
    vec![
        PublicPlan {
            id: 1,
            title: "Morning Workout Routine".to_string(),
            stages: 3,
            tasks: 9,
        },
        PublicPlan {
            id: 2,
            title: "Healthy Meal Prep".to_string(),
            stages: 4,
            tasks: 12,
        },
        PublicPlan {
            id: 3,
            title: "Yoga for Beginners".to_string(),
            stages: 5,
            tasks: 15,
        },
    ]
});

/// 关注切换回调：参数为(用户ID, 新的关注状态)
pub type FollowChangeCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

/// 用户点击回调：参数为被点击的用户名，路由跳转由宿主处理
pub type UserClickCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// 他人主页的内容面板。
/// 关注切换不改动本地统计，原样转发给宿主回调。
pub struct UserProfilePanel {
    core: ProfilePanelCore,
    on_follow_change: Option<FollowChangeCallback>,
    on_user_click: Option<UserClickCallback>,
    public_plans: Vec<PublicPlan>,
}

impl UserProfilePanel {
    pub fn new(fetcher: Arc<dyn RelationshipFetcher>, profile_id: Option<String>) -> Self {
        Self {
            core: ProfilePanelCore::new(fetcher, profile_id),
            on_follow_change: None,
            on_user_click: None,
            public_plans: MOCK_USER_PUBLIC_PLANS.clone(),
        }
    }

    pub fn with_follow_change(mut self, callback: FollowChangeCallback) -> Self {
        self.on_follow_change = Some(callback);
        self
    }

    pub fn with_user_click(mut self, callback: UserClickCallback) -> Self {
        self.on_user_click = Some(callback);
        self
    }

    pub async fn activate_tab(&self, tab: ProfileTab) {
        self.core.activate_tab(tab).await;
    }

    pub async fn deactivate(&self) {
        self.core.deactivate().await;
    }

    pub async fn active_tab(&self) -> ProfileTab {
        self.core.active_tab().await
    }

    /// 不管处于哪个标签都转发，宿主决定要不要更新自己的统计
    pub async fn on_follow_toggle(&self, user_id: &str, now_following: bool) {
        if let Some(callback) = &self.on_follow_change {
            callback(user_id, now_following);
        }
    }

    pub fn handle_user_click(&self, username: &str) {
        if let Some(callback) = &self.on_user_click {
            callback(username);
        }
    }

    pub async fn content(&self) -> PanelContent {
        let state = self.core.state.read().await;

        if state.loading {
            return PanelContent::Loading;
        }
        if let Some(error) = &state.error {
            return PanelContent::Error(error.clone());
        }

        match state.active_tab {
            ProfileTab::PublicPlans => {
                if self.public_plans.is_empty() {
                    empty_state("No public plans yet", "This user hasn't published any plans")
                } else {
                    PanelContent::PublicPlans(self.public_plans.clone())
                }
            }
            ProfileTab::Followings => {
                if state.followings.is_empty() {
                    empty_state("Not following anyone yet", "This user doesn't follow anyone")
                } else {
                    PanelContent::Users(state.followings.clone())
                }
            }
            ProfileTab::Followers => {
                if state.followers.is_empty() {
                    empty_state("No followers yet", "This user doesn't have any followers")
                } else {
                    PanelContent::Users(state.followers.clone())
                }
            }
        }
    }
}
