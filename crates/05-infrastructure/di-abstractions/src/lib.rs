//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Bean`] / [`BeanDescriptor`] - 组件的依赖声明
//! - [`DependencyTag`] - `name[,optional]` 形式的依赖标签
//! - [`BeanRef`] - 注册表中的组件实例引用
//! - [`BeanLookup`] / [`Keeper`] - 注册表读写接口
//! - [`RegisterOption`] / [`KeeperOption`] - 注册与容器选项

pub mod bean_ref;
pub mod descriptor;
pub mod keeper;
pub mod options;
pub mod tag;

pub use bean_ref::*;
pub use descriptor::*;
pub use keeper::*;
pub use options::*;
pub use tag::*;
