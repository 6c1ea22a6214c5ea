//! 组件实例引用

use infrastructure_common::TypeInfo;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 注册表中存放的组件实例
///
/// 克隆只复制引用，指向同一个实例。
#[derive(Clone)]
pub struct BeanRef {
    type_info: TypeInfo,
    instance: Arc<dyn Any + Send + Sync>,
}

impl BeanRef {
    /// 包装一个共享实例
    pub fn new<T: Any + Send + Sync>(instance: Arc<T>) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            instance,
        }
    }

    /// 实例的具体类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// 实例的类型名称
    pub fn type_name(&self) -> &str {
        self.type_info.short_name()
    }

    /// 实例是否为指定类型
    pub fn is<T: Any + Send + Sync>(&self) -> bool {
        self.type_info.is::<T>()
    }

    /// 转换为具体类型
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.instance).downcast::<T>().ok()
    }

    /// 类型擦除后的实例
    pub fn instance(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.instance
    }

    /// 两个引用是否指向同一实例
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }

    /// 是否与给定的共享实例相同
    pub fn is_same<T: Any + Send + Sync>(&self, other: &Arc<T>) -> bool {
        self.downcast::<T>()
            .is_some_and(|instance| Arc::ptr_eq(&instance, other))
    }
}

impl fmt::Debug for BeanRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRef")
            .field("type", &self.type_info.module_path)
            .field("instance", &"<bean>")
            .finish()
    }
}
