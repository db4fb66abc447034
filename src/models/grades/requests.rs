use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::models::FieldError;
use crate::utils::datetime::parse_iso_datetime;
use crate::utils::validate::{validate_name, validate_score};

// 创建成绩请求
#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub class_name: String,
    pub student_name: String,
    pub score: i32,
    pub date: Option<String>,
}

// 已通过校验、可直接落库的新成绩
#[derive(Debug, Clone)]
pub struct NewGrade {
    pub class_name: String,
    pub student_name: String,
    pub score: i32,
    // None = 使用创建时刻
    pub date: Option<DateTime<Utc>>,
}

impl CreateGradeRequest {
    /// 校验创建请求，收集所有字段级错误
    pub fn validate(self) -> Result<NewGrade, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(msg) = validate_name(&self.class_name) {
            errors.push(FieldError::new("class_name", msg, json!(self.class_name)));
        }
        if let Err(msg) = validate_name(&self.student_name) {
            errors.push(FieldError::new("student_name", msg, json!(self.student_name)));
        }
        if let Err(msg) = validate_score(self.score) {
            errors.push(FieldError::new("score", msg, json!(self.score)));
        }

        let date = match self.date.as_deref() {
            Some(raw) => match parse_iso_datetime(raw) {
                Ok(dt) => Some(dt),
                Err(msg) => {
                    errors.push(FieldError::new("date", msg, json!(raw)));
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewGrade {
            class_name: self.class_name,
            student_name: self.student_name,
            score: self.score,
            date,
        })
    }
}

// 更新成绩请求
//
// 外层 Option 表示字段是否出现在请求体中，内层 Option 表示出现时的取值。
// 缺失的字段不参与合并；所有列均非空，显式 null 是校验错误。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGradeRequest {
    #[serde(default, deserialize_with = "present_field")]
    pub class_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field")]
    pub student_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field")]
    pub score: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present_field")]
    pub date: Option<Option<String>>,
}

// 字段只要出现在请求体中就包一层 Some，区分缺失与显式 null
fn present_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// 仅包含显式提供字段的补丁，由存储层逐字段合并
#[derive(Debug, Clone, Default)]
pub struct GradePatch {
    pub class_name: Option<String>,
    pub student_name: Option<String>,
    pub score: Option<i32>,
    pub date: Option<DateTime<Utc>>,
}

impl UpdateGradeRequest {
    /// 校验更新请求，产出待合并的补丁
    pub fn validate(self) -> Result<GradePatch, Vec<FieldError>> {
        const NULL_MSG: &str = "Field must not be null";

        let mut errors = Vec::new();
        let mut patch = GradePatch::default();

        match self.class_name {
            Some(Some(value)) => {
                if let Err(msg) = validate_name(&value) {
                    errors.push(FieldError::new("class_name", msg, json!(value)));
                } else {
                    patch.class_name = Some(value);
                }
            }
            Some(None) => errors.push(FieldError::new("class_name", NULL_MSG, json!(null))),
            None => {}
        }

        match self.student_name {
            Some(Some(value)) => {
                if let Err(msg) = validate_name(&value) {
                    errors.push(FieldError::new("student_name", msg, json!(value)));
                } else {
                    patch.student_name = Some(value);
                }
            }
            Some(None) => errors.push(FieldError::new("student_name", NULL_MSG, json!(null))),
            None => {}
        }

        match self.score {
            Some(Some(value)) => {
                if let Err(msg) = validate_score(value) {
                    errors.push(FieldError::new("score", msg, json!(value)));
                } else {
                    patch.score = Some(value);
                }
            }
            Some(None) => errors.push(FieldError::new("score", NULL_MSG, json!(null))),
            None => {}
        }

        match self.date {
            Some(Some(raw)) => match parse_iso_datetime(&raw) {
                Ok(dt) => patch.date = Some(dt),
                Err(msg) => errors.push(FieldError::new("date", msg, json!(raw))),
            },
            Some(None) => errors.push(FieldError::new("date", NULL_MSG, json!(null))),
            None => {}
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(patch)
    }
}
