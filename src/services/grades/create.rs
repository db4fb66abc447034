use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::{ErrorResponse, ValidationErrorResponse};

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验失败不触及存储层
    let new_grade = match grade_data.validate() {
        Ok(new_grade) => new_grade,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors)));
        }
    };

    match storage.create_grade(new_grade).await {
        Ok(grade) => {
            info!(
                "Grade {} created for student {} in class {}",
                grade.id, grade.student_name, grade.class_name
            );
            Ok(HttpResponse::Created().json(grade))
        }
        Err(e) => {
            error!("Grade creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to save to the database",
                e.message(),
            )))
        }
    }
}
