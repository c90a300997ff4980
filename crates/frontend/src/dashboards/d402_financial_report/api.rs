use crate::shared::api::{ApiClient, ApiError, ListQuery};
use contracts::paging::ListResult;
use contracts::reports::{FinanceRow, FinanceSummary};

pub async fn list(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<ListResult<FinanceRow>, ApiError> {
    client.list("reports/finance", query).await
}

/// Period aggregate. Both bounds empty means "all time".
pub async fn summary(
    client: &ApiClient,
    start_at: &str,
    end_at: &str,
) -> Result<FinanceSummary, ApiError> {
    let path = if start_at.is_empty() {
        "reports/finance/summary".to_string()
    } else {
        format!("reports/finance/summary?start_at={start_at}&end_at={end_at}")
    };
    client.get_json(&path).await
}
