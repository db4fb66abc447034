pub mod common;
pub mod grades;

pub use common::response::{ErrorResponse, FieldError, MessageResponse, ValidationErrorResponse};
