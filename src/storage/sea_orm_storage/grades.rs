//! 成绩存储操作
//!
//! 每个写操作包裹在显式事务中：begin -> 执行 -> commit，失败即 rollback，
//! 保证失败时记录保持写前状态。

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Model};
use crate::errors::{GradeServiceError, Result};
use crate::models::grades::{
    entities::Grade,
    requests::{GradePatch, NewGrade},
};
use crate::utils::datetime::now_millis;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use uuid::Uuid;

impl SeaOrmStorage {
    /// 创建成绩
    pub async fn create_grade_impl(&self, grade: NewGrade) -> Result<Grade> {
        let now = now_millis();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            class_name: Set(grade.class_name),
            student_name: Set(grade.student_name),
            score: Set(grade.score),
            // 未提供日期时使用创建时刻
            date: Set(grade.date.map(|d| d.timestamp_millis()).unwrap_or(now)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("开启事务失败: {e}")))?;

        let inserted = match model.insert(&txn).await {
            Ok(inserted) => inserted,
            Err(e) => {
                txn.rollback().await.ok();
                return Err(GradeServiceError::database_operation(format!(
                    "创建成绩失败: {e}"
                )));
            }
        };

        txn.commit()
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted.into_grade())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: Uuid) -> Result<Option<Grade>> {
        Ok(self.find_model_impl(id).await?.map(|m| m.into_grade()))
    }

    /// 列出全部成绩，按 created_at、id 升序保证确定性
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let models = Grades::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 更新成绩，仅合并补丁中显式提供的字段
    pub async fn update_grade_impl(&self, id: Uuid, patch: GradePatch) -> Result<Option<Grade>> {
        // 先检查成绩是否存在
        let existing = match self.find_model_impl(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        // 时钟未前进时抬高一毫秒，保证 updated_at 严格递增
        let now = now_millis().max(existing.updated_at + 1);

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_name) = patch.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(student_name) = patch.student_name {
            model.student_name = Set(student_name);
        }

        if let Some(score) = patch.score {
            model.score = Set(score);
        }

        if let Some(date) = patch.date {
            model.date = Set(date.timestamp_millis());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("开启事务失败: {e}")))?;

        if let Err(e) = model.update(&txn).await {
            txn.rollback().await.ok();
            return Err(GradeServiceError::database_operation(format!(
                "更新成绩失败: {e}"
            )));
        }

        txn.commit()
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: Uuid) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("开启事务失败: {e}")))?;

        let result = match Grades::delete_by_id(id).exec(&txn).await {
            Ok(result) => result,
            Err(e) => {
                txn.rollback().await.ok();
                return Err(GradeServiceError::database_operation(format!(
                    "删除成绩失败: {e}"
                )));
            }
        };

        txn.commit()
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    async fn find_model_impl(&self, id: Uuid) -> Result<Option<Model>> {
        Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradeServiceError::database_operation(format!("查询成绩失败: {e}")))
    }
}
