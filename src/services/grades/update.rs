use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};
use uuid::Uuid;

use super::GradeService;
use crate::models::grades::requests::UpdateGradeRequest;
use crate::models::{ErrorResponse, ValidationErrorResponse};

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: Uuid,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认成绩存在，不存在时直接 404，不进入校验
    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new(format!(
                "Grade with id {grade_id} not found"
            ))));
        }
        Err(e) => {
            error!("Grade lookup failed for {}: {}", grade_id, e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to read from the database",
                e.message(),
            )));
        }
    }

    // 校验失败不触及写路径
    let patch = match update_data.validate() {
        Ok(patch) => patch,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors)));
        }
    };

    match storage.update_grade(grade_id, patch).await {
        Ok(Some(grade)) => {
            info!("Grade {} updated", grade_id);
            Ok(HttpResponse::Ok().json(grade))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(format!(
            "Grade with id {grade_id} not found"
        )))),
        Err(e) => {
            error!("Grade update failed for {}: {}", grade_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to update the database",
                e.message(),
            )))
        }
    }
}
