use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a006_user::{User, UserDraft};
use contracts::paging::ListResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<User>, ApiError> {
    client.list("users", query).await
}

pub async fn create(client: &ApiClient, draft: &UserDraft) -> Result<(), ApiError> {
    client.post("users", draft).await
}

/// Accounts are addressed by username, which never changes after creation.
pub async fn update(client: &ApiClient, username: &str, draft: &UserDraft) -> Result<(), ApiError> {
    client.put(&format!("users/{username}"), draft).await
}

pub async fn remove(client: &ApiClient, username: &str) -> Result<(), ApiError> {
    client.delete(&format!("users/{username}")).await
}
