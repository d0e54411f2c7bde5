//! 配置管理
//!
//! 配置来源（后者覆盖前者）：`config` 文件、`config.{APP_ENV}` 文件、
//! `WORKSYSTEM_*` 及常用环境变量。

mod r#impl;
mod structs;

pub use structs::*;
