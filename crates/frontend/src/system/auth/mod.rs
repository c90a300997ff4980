pub mod api;
pub mod context;
pub mod login;
pub mod storage;
