use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::ErrorResponse;

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades().await {
        Ok(grades) => Ok(HttpResponse::Ok().json(grades)),
        Err(e) => {
            error!("Failed to list grades: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                "Failed to query the database",
                e.message(),
            )))
        }
    }
}
