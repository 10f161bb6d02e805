use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 没有用户名也没有邮箱时的显示名
const FALLBACK_USERNAME: &str = "User";

/// 网关返回的原始用户记录，缺失字段在边界处补默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// 角色集中是否带有管理员标记
    pub fn is_admin(&self) -> bool {
        self.roles
            .iter()
            .any(|role| role.eq_ignore_ascii_case("ADMIN") || role == "SCOPE_ADMIN")
    }
}

/// 列表卡片使用的用户摘要，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl From<UserRecord> for UserSummary {
    fn from(record: UserRecord) -> Self {
        let username = match record.username.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => record
                .email
                .as_deref()
                .and_then(|email| email.split('@').next())
                .filter(|local| !local.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| FALLBACK_USERNAME.to_string()),
        };

        Self {
            id: record.id,
            username,
            email: record.email,
            avatar: record.avatar,
        }
    }
}

/// 身份接口返回的当前登录用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: Option<&str>, email: Option<&str>) -> UserRecord {
        UserRecord {
            id: "u-1".to_string(),
            username: username.map(str::to_string),
            email: email.map(str::to_string),
            avatar: None,
            roles: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn username_used_when_present() {
        let summary = UserSummary::from(record(Some("alice"), Some("a@b.com")));
        assert_eq!(summary.username, "alice");
    }

    #[test]
    fn username_falls_back_to_email_local_part() {
        let summary = UserSummary::from(record(None, Some("a@b.com")));
        assert_eq!(summary.username, "a");
        assert_eq!(summary.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn username_falls_back_to_literal_when_nothing_usable() {
        let summary = UserSummary::from(record(None, None));
        assert_eq!(summary.username, "User");

        let summary = UserSummary::from(record(Some(""), Some("")));
        assert_eq!(summary.username, "User");
    }

    #[test]
    fn admin_markers_match_case_insensitive_admin_and_exact_scope_admin() {
        let mut admin = record(Some("root"), None);
        admin.roles = vec!["admin".to_string()];
        assert!(admin.is_admin());

        let mut scoped = record(Some("ops"), None);
        scoped.roles = vec!["SCOPE_ADMIN".to_string()];
        assert!(scoped.is_admin());

        // SCOPE_ADMIN 只做精确匹配
        let mut lowercase_scope = record(Some("ops"), None);
        lowercase_scope.roles = vec!["scope_admin".to_string()];
        assert!(!lowercase_scope.is_admin());

        let mut regular = record(Some("bob"), None);
        regular.roles = vec!["USER".to_string()];
        assert!(!regular.is_admin());
    }

    #[test]
    fn missing_fields_deserialize_with_defaults() {
        let record: UserRecord = serde_json::from_str(r#"{"id":"u-9"}"#).unwrap();
        assert!(record.username.is_none());
        assert!(record.roles.is_empty());
    }
}
