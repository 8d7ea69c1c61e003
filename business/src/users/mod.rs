//! User account management: wire types, REST calls, the query cache, and one
//! command + compute-shaped cache per operation.

pub mod api;
pub mod cache;
pub mod create_user;
pub mod delete_user;
pub mod list_users;
pub mod panel_state;
pub mod update_status;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account status of a platform user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Suspended];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
        }
    }
}

/// One user account as returned by the users endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

/// Server-side filters for the list endpoint. Also part of the cache key, so
/// two filter sets compare equal exactly when they address the same query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserFilters {
    pub role: Option<String>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserPayload {
    pub full_name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserStatusPayload {
    pub status: UserStatus,
}

/// Paginated envelope the users endpoints wrap their data in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_status_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Suspended).expect("encode status"),
            "\"suspended\""
        );
        let status: UserStatus = serde_json::from_str("\"inactive\"").expect("decode status");
        assert_eq!(status, UserStatus::Inactive);
    }

    #[test]
    fn filters_compare_by_value() {
        let a = UserFilters {
            role: Some("agent".to_owned()),
            status: Some(UserStatus::Active),
            search: None,
        };
        let b = a.clone();
        assert_eq!(a, b);
        let c = UserFilters {
            search: Some("alice".to_owned()),
            ..a.clone()
        };
        assert_ne!(a, c);
    }
}
