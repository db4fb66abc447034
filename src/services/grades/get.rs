use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;
use uuid::Uuid;

use super::GradeService;
use crate::models::ErrorResponse;

pub async fn get_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(grade)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(format!(
            "Grade with id {grade_id} not found"
        )))),
        Err(e) => {
            error!("Failed to get grade {}: {}", grade_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to query the database",
                e.message(),
            )))
        }
    }
}
