use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::domain::a004_distributor::{Distributor, DistributorDraft};
use contracts::paging::ListResult;

pub async fn list(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<ListResult<Distributor>, ApiError> {
    client.list("distributors", query).await
}

pub async fn create(client: &ApiClient, draft: &DistributorDraft) -> Result<(), ApiError> {
    client.post("distributors", draft).await
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    draft: &DistributorDraft,
) -> Result<(), ApiError> {
    client.put(&format!("distributors/{id}"), draft).await
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("distributors/{id}")).await
}
