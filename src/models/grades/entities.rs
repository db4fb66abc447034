use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    // 记录ID（服务端生成，不可变）
    pub id: Uuid,
    // 班级名称
    pub class_name: String,
    // 学生姓名
    pub student_name: String,
    // 分数 0-10
    pub score: i32,
    // 成绩日期
    pub date: chrono::DateTime<chrono::Utc>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
