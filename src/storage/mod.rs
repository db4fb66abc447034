use std::sync::Arc;

use uuid::Uuid;

use crate::errors::Result;
use crate::models::grades::{
    entities::Grade,
    requests::{GradePatch, NewGrade},
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 成绩管理方法
    // 创建成绩（服务端生成 ID 与时间戳）
    async fn create_grade(&self, grade: NewGrade) -> Result<Grade>;
    // 通过ID获取成绩
    async fn get_grade_by_id(&self, id: Uuid) -> Result<Option<Grade>>;
    // 列出全部成绩（按 created_at、id 升序）
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    // 合并显式提供的字段，刷新 updated_at
    async fn update_grade(&self, id: Uuid, patch: GradePatch) -> Result<Option<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, id: Uuid) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
