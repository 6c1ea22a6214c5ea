//! 组件依赖描述
//!
//! 每个组件类型通过 [`Bean::descriptor`] 声明自己的依赖字段：
//! 字段名、依赖标签、声明类型以及赋值函数。绑定器只通过描述符访问字段，
//! 因此私有字段的注入由组件自身模块内生成的赋值函数完成。
//! 注入完成后的回调来自组件的 [`Initializer`] 实现，不需要在描述符中声明。
//!
//! ```rust
//! use di_abstractions::{Bean, BeanDescriptor};
//! use infrastructure_common::Initializer;
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Repository;
//!
//! #[derive(Default)]
//! struct Service {
//!     repository: Option<Arc<Repository>>,
//! }
//!
//! impl Initializer for Service {}
//!
//! impl Bean for Service {
//!     fn descriptor() -> BeanDescriptor<Self> {
//!         BeanDescriptor::new().inject("repository", "repository", |bean: &mut Self, dep| {
//!             bean.repository = Some(dep);
//!         })
//!     }
//! }
//!
//! assert_eq!(Service::descriptor().bindings().len(), 1);
//! ```

use crate::bean_ref::BeanRef;
use crate::tag::DependencyTag;
use infrastructure_common::{Initializer, TypeInfo};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 可注入组件 trait
///
/// 绑定器在字段赋值完成后总会调用 [`Initializer::after_property_set`]。
pub trait Bean: Initializer + Any + Send + Sync + Sized {
    /// 组件的依赖描述
    fn descriptor() -> BeanDescriptor<Self>;
}

/// 延迟执行的字段赋值
pub type Assignment<T> = Box<dyn FnOnce(&mut T) + Send>;

type Resolver<T> = Box<dyn Fn(&BeanRef) -> Option<Assignment<T>> + Send + Sync>;

/// 单个依赖字段的绑定信息
pub struct FieldBinding<T> {
    field: &'static str,
    tag: DependencyTag,
    declared_type: TypeInfo,
    resolver: Resolver<T>,
}

impl<T> FieldBinding<T> {
    /// 字段名称
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// 依赖标签
    pub fn tag(&self) -> &DependencyTag {
        &self.tag
    }

    /// 字段声明的依赖类型
    pub fn declared_type(&self) -> &TypeInfo {
        &self.declared_type
    }

    /// 根据找到的组件生成赋值操作，类型不匹配时返回 `None`
    pub fn resolve(&self, bean: &BeanRef) -> Option<Assignment<T>> {
        (self.resolver)(bean)
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field", &self.field)
            .field("tag", &self.tag)
            .field("declared_type", &self.declared_type.name)
            .finish_non_exhaustive()
    }
}

/// 组件依赖描述符
pub struct BeanDescriptor<T> {
    type_info: TypeInfo,
    bindings: Vec<FieldBinding<T>>,
}

impl<T: Any + Send + Sync> BeanDescriptor<T> {
    /// 创建空描述符
    pub fn new() -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            bindings: Vec::new(),
        }
    }

    /// 声明一个依赖字段
    ///
    /// `tag` 形如 `name` 或 `name,optional`。找到的组件必须是 `D` 类型。
    pub fn inject<D, F>(mut self, field: &'static str, tag: &str, setter: F) -> Self
    where
        D: Any + Send + Sync,
        F: Fn(&mut T, Arc<D>) + Send + Sync + 'static,
    {
        let setter = Arc::new(setter);
        let resolver: Resolver<T> = Box::new(move |bean: &BeanRef| {
            let dependency = bean.downcast::<D>()?;
            let setter = Arc::clone(&setter);
            Some(Box::new(move |target: &mut T| setter(target, dependency)) as Assignment<T>)
        });

        self.bindings.push(FieldBinding {
            field,
            tag: DependencyTag::parse(tag),
            declared_type: TypeInfo::of::<D>(),
            resolver,
        });
        self
    }
}

impl<T> BeanDescriptor<T> {
    /// 组件类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 按声明顺序排列的依赖字段
    pub fn bindings(&self) -> &[FieldBinding<T>] {
        &self.bindings
    }
}

impl<T: Any + Send + Sync> Default for BeanDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BeanDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDescriptor")
            .field("type", &self.type_info.name)
            .field("bindings", &self.bindings)
            .finish()
    }
}
