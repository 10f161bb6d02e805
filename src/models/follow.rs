use serde::{Deserialize, Serialize};
use std::fmt;

/// 关注关系的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Followers,
    Followings,
}

impl RelationKind {
    /// 关系列表接口的路径段
    pub fn path_segment(&self) -> &'static str {
        match self {
            RelationKind::Followers => "followers",
            RelationKind::Followings => "followings",
        }
    }

    /// 对应标签加载失败时展示的提示文案
    pub fn load_error_message(&self) -> String {
        match self {
            RelationKind::Followers => "Could not load the followers list".to_string(),
            RelationKind::Followings => "Could not load the followings list".to_string(),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
