//! Read-only rows and summaries for the report pages. All amounts are
//! integer rupiah, all dates `YYYY-MM-DD` strings.

use serde::{Deserialize, Serialize};

/// One completed sale, as listed by `GET /reports/sales`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SaleRow {
    pub id: i64,
    pub date: String,
    pub invoice: String,
    pub branch_id: i64,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub cashier: String,
    pub items_count: i64,
    pub total: i64,
}

/// One ledger line of the financial report.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FinanceRow {
    pub id: i64,
    pub date: String,
    pub kind: FinanceKind,
    #[serde(default)]
    pub description: String,
    pub amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinanceKind {
    Income,
    Expense,
}

impl FinanceKind {
    pub fn label(self) -> &'static str {
        match self {
            FinanceKind::Income => "Pemasukan",
            FinanceKind::Expense => "Pengeluaran",
        }
    }
}

/// Aggregate for the selected period, computed server-side.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FinanceSummary {
    pub revenue: i64,
    pub expense: i64,
    pub profit: i64,
}

/// Today's headline figures for the overview dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct OverviewSummary {
    pub sales_today: i64,
    pub transactions_today: i64,
    pub unpaid_receivables: i64,
    pub low_stock_products: i64,
}
