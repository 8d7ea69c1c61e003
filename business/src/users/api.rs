//! REST calls for the users endpoints.
//!
//! Thin async functions over [`crate::http::Client`]; commands own the state
//! transitions, this module owns URLs, verbs, and status-code handling.

use super::{CreateUserPayload, PaginatedResponse, UpdateUserStatusPayload, User, UserFilters};
use crate::http::Client;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UsersApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },
}

pub type ApiResult<T> = Result<T, UsersApiError>;

fn list_url(base: &str, page: u32, filters: &UserFilters) -> String {
    let mut url = format!("{base}/users?page={page}");
    if let Some(role) = &filters.role {
        url.push_str("&role=");
        url.push_str(&urlencoding::encode(role));
    }
    if let Some(status) = filters.status {
        url.push_str("&status=");
        url.push_str(status.label().to_lowercase().as_str());
    }
    if let Some(search) = &filters.search {
        url.push_str("&search=");
        url.push_str(&urlencoding::encode(search));
    }
    url
}

pub async fn list_users(
    base: &str,
    page: u32,
    filters: &UserFilters,
) -> ApiResult<PaginatedResponse<User>> {
    let response = Client::get(list_url(base, page, filters))
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;
    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }
    response.json().map_err(|e| UsersApiError::Parse {
        what: "user list",
        message: e.to_string(),
    })
}

pub async fn create_user(base: &str, payload: &CreateUserPayload) -> ApiResult<User> {
    let request = Client::post(format!("{base}/users"))
        .json(payload)
        .map_err(|e| UsersApiError::Parse {
            what: "create payload",
            message: e.to_string(),
        })?;
    let response = request
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;
    if response.status != 201 {
        return Err(UsersApiError::Status(response.status));
    }
    response.json().map_err(|e| UsersApiError::Parse {
        what: "created user",
        message: e.to_string(),
    })
}

pub async fn update_user_status(
    base: &str,
    user_id: &str,
    payload: &UpdateUserStatusPayload,
) -> ApiResult<User> {
    let request = Client::patch(format!("{base}/users/{user_id}/status"))
        .json(payload)
        .map_err(|e| UsersApiError::Parse {
            what: "status payload",
            message: e.to_string(),
        })?;
    let response = request
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;
    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }
    response.json().map_err(|e| UsersApiError::Parse {
        what: "updated user",
        message: e.to_string(),
    })
}

pub async fn delete_user(base: &str, user_id: &str) -> ApiResult<()> {
    let response = Client::delete(format!("{base}/users/{user_id}"))
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;
    // 200 with a body and 204 without are both in use by the backend.
    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }
    Ok(())
}
