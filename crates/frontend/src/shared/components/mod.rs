pub mod date_range_input;
pub mod modal;
pub mod pagination;
pub mod search_input;
pub mod stat_card;

pub use date_range_input::DateRangeInput;
pub use modal::Modal;
pub use pagination::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
