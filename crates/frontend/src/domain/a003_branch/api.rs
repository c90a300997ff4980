use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a003_branch::{Branch, BranchDraft};
use contracts::paging::ListResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<Branch>, ApiError> {
    client.list("branches", query).await
}

/// Unpaginated fetch for the sales report branch filter.
pub async fn all(client: &ApiClient) -> Result<Vec<Branch>, ApiError> {
    let query = ListQuery {
        size: 1000,
        ..Default::default()
    };
    Ok(client.list("branches", &query).await?.items)
}

pub async fn create(client: &ApiClient, draft: &BranchDraft) -> Result<(), ApiError> {
    client.post("branches", draft).await
}

pub async fn update(client: &ApiClient, id: i64, draft: &BranchDraft) -> Result<(), ApiError> {
    client.put(&format!("branches/{id}"), draft).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("branches/{id}")).await
}
