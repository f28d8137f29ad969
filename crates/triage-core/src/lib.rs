//! # Triage Core
//!
//! 急诊预检分诊系统的核心模块，提供基础数据结构、错误定义和字段校验工具。

pub mod error;
pub mod models;
pub mod validation;

pub use error::{Result, TriageError};
pub use models::*;
