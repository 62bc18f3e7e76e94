//! Shared HTTP plumbing: error responses, pagination, CSV and validation

pub mod csv;
pub mod error;
pub mod pagination;
pub mod validated_json;

pub use error::{ApiError, ApiResult};
pub use pagination::{PaginatedResponse, PaginationParams};
pub use validated_json::ValidatedJson;
