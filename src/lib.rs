//! Grade Record Service - 成绩记录服务
//!
//! 基于 Actix Web 构建的成绩 CRUD 服务后端。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `secrets`: 数据库凭据解析（Vault）
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod secrets;
pub mod services;
pub mod storage;
pub mod utils;
