//! 预导入模块，方便使用

pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
