//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub class_name: String,
    pub student_name: String,
    pub score: i32,
    // 时间戳统一存 epoch 毫秒
    pub date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::Grade;
        use chrono::{DateTime, Utc};

        Grade {
            id: self.id,
            class_name: self.class_name,
            student_name: self.student_name,
            score: self.score,
            date: DateTime::<Utc>::from_timestamp_millis(self.date).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at)
                .unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp_millis(self.updated_at)
                .unwrap_or_default(),
        }
    }
}
