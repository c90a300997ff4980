use crate::shared::api::{ApiClient, ApiError};
use contracts::reports::OverviewSummary;

pub async fn summary(client: &ApiClient) -> Result<OverviewSummary, ApiError> {
    client.get_json("reports/overview").await
}
