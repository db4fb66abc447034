//! 路径参数提取器

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::models::ErrorResponse;

/// 安全的成绩 ID 提取器
///
/// 路径段不是合法 UUID 时直接按 404 处理，不进入业务层。
#[derive(Debug, Clone, Copy)]
pub struct SafeGradeId(pub Uuid);

impl FromRequest for SafeGradeId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("grade_id").unwrap_or_default();

        let result = Uuid::parse_str(raw).map(SafeGradeId).map_err(|_| {
            let response = HttpResponse::NotFound().json(ErrorResponse::new(format!(
                "Grade with id {raw} not found"
            )));
            InternalError::from_response("invalid grade id", response).into()
        });

        ready(result)
    }
}
