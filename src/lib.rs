//! QuizSystem - 在线测验平台后端服务
//!
//! 基于 Actix Web 构建的测验组卷、答题与统计后端。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（组卷、作答、判分、统计）
//! - `storage`: 数据存储层（内存实体仓库）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
