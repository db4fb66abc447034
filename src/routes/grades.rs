use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::{CreateGradeRequest, UpdateGradeRequest};
use crate::services::GradeService;
use crate::utils::SafeGradeId;

// 懒加载的全局 GRADE_SERVICE 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(&req, grade_data.into_inner())
        .await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeGradeId) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, grade_id.0).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeGradeId,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, grade_id.0, update_data.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeGradeId) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, grade_id.0).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/grades")
            .service(
                web::resource("")
                    .route(web::get().to(list_grades))
                    .route(web::post().to(create_grade)),
            )
            .service(
                web::resource("/{grade_id}")
                    .route(web::get().to(get_grade))
                    .route(web::put().to(update_grade))
                    .route(web::delete().to(delete_grade)),
            ),
    );
}
