pub mod d400_overview;
pub mod d401_sales_report;
pub mod d402_financial_report;
