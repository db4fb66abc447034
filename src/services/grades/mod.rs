pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::grades::requests::{CreateGradeRequest, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取成绩列表
    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_grades(self, request).await
    }

    // 创建成绩
    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, request, grade_data).await
    }

    // 根据 ID 获取成绩
    pub async fn get_grade(&self, request: &HttpRequest, grade_id: Uuid) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, grade_id).await
    }

    // 部分更新成绩
    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        grade_id: Uuid,
        update_data: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, request, grade_id, update_data).await
    }

    // 根据 ID 删除成绩
    pub async fn delete_grade(
        &self,
        request: &HttpRequest,
        grade_id: Uuid,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, request, grade_id).await
    }
}
