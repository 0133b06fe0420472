//! 配置管理
//!
//! 配置来源依次为 `config.toml`、`config.{APP_ENV}.toml`、`SCHOOL__` 前缀环境变量，
//! 以及少量常用环境变量（`DATABASE_URL`、`JWT_SECRET` 等）。

mod r#impl;
mod structs;

pub use structs::*;
