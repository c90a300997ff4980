use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::paging::ListResult;
use contracts::reports::SaleRow;

pub async fn list(client: &ApiClient, query: &ListQuery) -> Result<ListResult<SaleRow>, ApiError> {
    client.list("reports/sales", query).await
}
