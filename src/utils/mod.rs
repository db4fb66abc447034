pub mod datetime;
pub mod extractor;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::SafeGradeId;
pub use parameter_error_handler::json_error_handler;
