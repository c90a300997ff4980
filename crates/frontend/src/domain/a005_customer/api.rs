use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a005_customer::{Customer, CustomerDraft};
use contracts::paging::ListResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<Customer>, ApiError> {
    client.list("customers", query).await
}

pub async fn create(client: &ApiClient, draft: &CustomerDraft) -> Result<(), ApiError> {
    client.post("customers", draft).await
}

pub async fn update(client: &ApiClient, id: i64, draft: &CustomerDraft) -> Result<(), ApiError> {
    client.put(&format!("customers/{id}"), draft).await
}

/// Marks every open receivable of the customer as paid.
pub async fn settle(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.put(&format!("customers/{id}/pay"), &serde_json::json!({})).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("customers/{id}")).await
}
