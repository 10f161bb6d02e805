use crate::{
    api::{IdentityProvider, UserDirectory},
    error::Result,
    models::{Plan, UserSummary},
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// 探索页信息流的条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Plan,
    User,
}

/// 钻取视图里承载的已解析条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItems {
    Plans(Vec<Plan>),
    Users(Vec<UserSummary>),
}

/// 页面级展示模式：双轮播或单一全量列表。
/// 切换只由用户操作驱动，与任何面板的标签状态无关。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Browse,
    FullView {
        kind: FeedKind,
        title: String,
        items: FeedItems,
    },
}

/// 计划信息流来源。目前是静态数据，后续可换成真实接口。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanFeed: Send + Sync {
    async fn explore_plans(&self) -> Result<Vec<Plan>>;
}

static EXPLORE_PLANS: Lazy<Vec<Plan>> = Lazy::new(|| {
    let entries = [
        ("plan-1", "IELTS Speaking Mastery", "8 weeks • Advanced"),
        ("plan-2", "TOEFL Reading Pro", "6 weeks • Intermediate"),
        ("plan-3", "Business English Essentials", "10 weeks • All levels"),
        ("plan-4", "Academic Writing for IELTS", "4 weeks • Band 7+"),
        ("plan-5", "Daily English Conversation", "12 weeks • Beginner"),
        ("plan-6", "SAT Vocabulary Builder", "8 weeks • High School"),
    ];
    entries
        .iter()
        .map(|(id, title, duration)| Plan {
            id: id.to_string(),
            title: title.to_string(),
            duration: duration.to_string(),
            category: "english".to_string(),
            is_public: true,
        })
        .collect()
});

/// 固定的探索页计划源
#[derive(Debug, Clone, Default)]
pub struct StaticPlanFeed;

#[async_trait]
impl PlanFeed for StaticPlanFeed {
    async fn explore_plans(&self) -> Result<Vec<Plan>> {
        Ok(EXPLORE_PLANS.clone())
    }
}

#[derive(Debug)]
struct ExploreState {
    plans: Vec<Plan>,
    users: Vec<UserSummary>,
    loading: bool,
    current_user_id: Option<String>,
    view_mode: ViewMode,
}

/// 探索页快照，交给渲染层使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreSnapshot {
    pub plans: Vec<Plan>,
    pub users: Vec<UserSummary>,
    pub loading: bool,
    pub current_user_id: Option<String>,
    pub view_mode: ViewMode,
}

/// 探索页聚合器：合并计划信息流与用户目录。
/// load() 设计为单次执行，宿主用一次性副作用触发。
pub struct ExploreService {
    identity: Arc<dyn IdentityProvider>,
    directory: Arc<dyn UserDirectory>,
    plan_feed: Arc<dyn PlanFeed>,
    state: Arc<RwLock<ExploreState>>,
}

impl ExploreService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        directory: Arc<dyn UserDirectory>,
        plan_feed: Arc<dyn PlanFeed>,
    ) -> Self {
        Self {
            identity,
            directory,
            plan_feed,
            state: Arc::new(RwLock::new(ExploreState {
                plans: Vec::new(),
                users: Vec::new(),
                loading: true,
                current_user_id: None,
                view_mode: ViewMode::Browse,
            })),
        }
    }

    /// 每个数据源的失败相互隔离，任何一个都不阻塞其余部分；
    /// 无论结果如何最终都会离开加载态。
    pub async fn load(&self) {
        // 1. 尽力解析当前用户，未登录时跳过自我过滤
        let viewer_id = match self.identity.current_user().await {
            Ok(user) => Some(user.id),
            Err(err) => {
                debug!(
                    "Could not resolve current user (possibly not logged in): {}",
                    err
                );
                None
            }
        };
        if let Some(id) = &viewer_id {
            self.state.write().await.current_user_id = Some(id.clone());
        }

        // 2+3. 计划源与用户目录互不等待，结果各自独立降级
        let (plans_result, users_result) =
            tokio::join!(self.plan_feed.explore_plans(), self.directory.list_users());

        let plans = plans_result.unwrap_or_else(|err| {
            warn!("Failed to fetch explore plans: {}", err);
            Vec::new()
        });
        let records = users_result.unwrap_or_else(|err| {
            warn!("Failed to fetch users list: {}", err);
            Vec::new()
        });

        // 4+5. 过滤管理员与自己，再整形为摘要
        let users: Vec<UserSummary> = records
            .into_iter()
            .filter(|record| !record.is_admin())
            .filter(|record| viewer_id.as_deref().map_or(true, |id| record.id != id))
            .map(UserSummary::from)
            .collect();

        // 6. 同一次写锁内原子发布两个列表
        let mut state = self.state.write().await;
        state.plans = plans;
        state.users = users;
        state.loading = false;
    }

    /// 进入全量列表视图，直接使用已解析的条目，不重新拉取
    pub async fn view_more(&self, title: &str, items: FeedItems, kind: FeedKind) {
        let mut state = self.state.write().await;
        state.view_mode = ViewMode::FullView {
            kind,
            title: title.to_string(),
            items,
        };
    }

    /// 返回双轮播视图
    pub async fn back(&self) {
        let mut state = self.state.write().await;
        state.view_mode = ViewMode::Browse;
    }

    pub async fn snapshot(&self) -> ExploreSnapshot {
        let state = self.state.read().await;
        ExploreSnapshot {
            plans: state.plans.clone(),
            users: state.users.clone(),
            loading: state.loading,
            current_user_id: state.current_user_id.clone(),
            view_mode: state.view_mode.clone(),
        }
    }
}
