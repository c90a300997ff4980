use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a001_category::{Category, CategoryDraft};
use contracts::paging::ListResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<Category>, ApiError> {
    client.list("categories", query).await
}

/// Unpaginated fetch for filter dropdowns (product form, product list).
pub async fn all(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let query = ListQuery {
        size: 1000,
        ..Default::default()
    };
    Ok(client.list("categories", &query).await?.items)
}

pub async fn create(client: &ApiClient, draft: &CategoryDraft) -> Result<(), ApiError> {
    client.post("categories", draft).await
}

pub async fn update(client: &ApiClient, id: i64, draft: &CategoryDraft) -> Result<(), ApiError> {
    client.put(&format!("categories/{id}"), draft).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("categories/{id}")).await
}
