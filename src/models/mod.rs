pub mod applications;
pub mod auth;
pub mod common;
pub mod evaluations;
pub mod jobs;
pub mod tests;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use common::AppStartTime;
