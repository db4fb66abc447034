//! 请求参数错误处理器
//!
//! 将 actix 的请求体解析失败统一转换为 400 + 结构化错误响应。

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ErrorResponse;

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let detail = err.to_string();
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::with_details("Malformed JSON body", detail));

    InternalError::from_response(err, response).into()
}
