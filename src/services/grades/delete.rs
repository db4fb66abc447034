use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};
use uuid::Uuid;

use super::GradeService;
use crate::models::{ErrorResponse, MessageResponse};

pub async fn delete_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: Uuid,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade(grade_id).await {
        Ok(true) => {
            info!("Grade {} deleted", grade_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
                "Grade with id {grade_id} deleted"
            ))))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(format!(
            "Grade with id {grade_id} not found"
        )))),
        Err(e) => {
            error!("Grade deletion failed for {}: {}", grade_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to delete from the database",
                e.message(),
            )))
        }
    }
}
