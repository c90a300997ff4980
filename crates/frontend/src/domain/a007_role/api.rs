use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a007_role::{Role, RoleDraft};
use contracts::paging::ListResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<Role>, ApiError> {
    client.list("roles", query).await
}

/// Unpaginated fetch for the user form role select.
pub async fn all(client: &ApiClient) -> Result<Vec<Role>, ApiError> {
    let query = ListQuery {
        size: 1000,
        ..Default::default()
    };
    Ok(client.list("roles", &query).await?.items)
}

pub async fn create(client: &ApiClient, draft: &RoleDraft) -> Result<(), ApiError> {
    client.post("roles", draft).await
}

pub async fn update(client: &ApiClient, id: i64, draft: &RoleDraft) -> Result<(), ApiError> {
    client.put(&format!("roles/{id}"), draft).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("roles/{id}")).await
}
