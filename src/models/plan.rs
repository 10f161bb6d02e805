use serde::{Deserialize, Serialize};

/// 探索页展示的计划条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub category: String,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
}

/// 个人主页 Public Plans 标签下的计划卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlan {
    pub id: u32,
    pub title: String,
    pub stages: u32,
    pub tasks: u32,
}

impl PublicPlan {
    /// 卡片副标题，例如 "3 stages • 9 tasks"
    pub fn meta_line(&self) -> String {
        format!("{} stages • {} tasks", self.stages, self.tasks)
    }
}
