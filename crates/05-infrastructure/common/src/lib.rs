//! # Infrastructure Common
//!
//! 这个 crate 提供了 Keeper 组件注册表的公共类型。
//!
//! ## 核心组件
//!
//! - [`KeeperError`] / [`DependencyError`] / [`ValidationError`] - 错误类型
//! - [`TypeInfo`] - 用于错误信息与日志的类型元数据
//! - [`Initializer`] - 依赖注入完成后的生命周期回调
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 同步、无锁的构建阶段
//! - 错误显式返回，从不 panic

pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
