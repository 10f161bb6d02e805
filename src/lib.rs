//! PlanHub 客户端核心库：社交关系浏览与关注状态同步。
//!
//! 三个入口相互独立：
//! - [`services::MyProfilePanel`] / [`services::UserProfilePanel`]：按标签
//!   按需加载关注者/关注中列表的内容面板；
//! - [`services::FollowActionRelay`]：把列表深处的关注切换回传到宿主页面
//!   的统计计数；
//! - [`services::ExploreService`]：聚合计划信息流与用户目录的探索页，
//!   支持钻取到全量列表视图。
//!
//! 身份、用户目录、关注关系三个网关接口都是不透明协作方，
//! 在 [`api`] 层适配成带默认值的显式记录类型。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志，宿主应用与集成测试共用
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| "planhub_client=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}

/// 加载 .env 并读取配置
pub fn load_config() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    Config::from_env()
}
