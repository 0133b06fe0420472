//! School Dashboard - 学校管理仪表盘后端服务
//!
//! 基于 Actix Web 构建，以 `POST /api/v1/rpc/<entity>.<operation>` 形式提供类型化的远程过程，
//! 并提供按角色划分的仪表盘页面数据。
//!
//! # 架构
//! - `cache`: 会话缓存（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件与请求上下文
//! - `models`: 数据模型定义
//! - `routes`: 远程过程、页面与健康检查路由
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（含成绩册惰性初始化、统计聚合、页面渲染）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
