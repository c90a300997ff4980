use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a002_product::{Product, ProductPayload};
use contracts::paging::ListResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<Product>, ApiError> {
    client.list("products", query).await
}

pub async fn create(client: &ApiClient, payload: &ProductPayload) -> Result<(), ApiError> {
    client.post("products", payload).await
}

pub async fn update(client: &ApiClient, id: i64, payload: &ProductPayload) -> Result<(), ApiError> {
    client.put(&format!("products/{id}"), payload).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("products/{id}")).await
}
