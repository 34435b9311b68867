//! Request and response types shared by the handlers

pub mod error;
pub mod json;
pub mod multipart;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use multipart::TeamForm;
