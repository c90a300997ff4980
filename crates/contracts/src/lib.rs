//! Shared data contracts between the back-office frontend and the REST API.
//!
//! Records are backend-owned: identity fields are assigned by the server,
//! the frontend only carries them around. Draft types mirror the editable
//! subset of a record and validate their required fields before any request
//! is issued.

pub mod auth;
pub mod domain;
pub mod paging;
pub mod reports;
pub mod validate;
