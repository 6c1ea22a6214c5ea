//! 注册表抽象接口

use crate::bean_ref::BeanRef;
use crate::descriptor::Bean;
use crate::options::RegisterOption;
use infrastructure_common::KeeperResult;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// 注册表只读接口
///
/// 构建阶段与冻结阶段的容器都实现此 trait。
pub trait BeanLookup {
    /// 按名称查找组件
    fn find(&self, name: &str) -> Option<BeanRef>;

    /// 所有组件的快照，修改返回值不影响注册表
    fn all(&self) -> HashMap<String, BeanRef>;

    /// 为目标注入依赖，但不注册目标本身
    fn provide<T: Bean>(&self, target: &mut T) -> KeeperResult<()>;

    /// 按名称查找并转换为具体类型
    fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.find(name).and_then(|bean| bean.downcast::<T>())
    }

    /// 是否已注册指定名称
    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// 注册表接口
pub trait Keeper: BeanLookup {
    /// 注入依赖并注册组件，返回注册后的共享实例
    fn register<T, I>(&mut self, bean: T, options: I) -> KeeperResult<Arc<T>>
    where
        T: Bean,
        I: IntoIterator<Item = RegisterOption>;

    /// 原样注册一个值，不做依赖注入
    fn register_value<T, I>(&mut self, value: T, options: I) -> KeeperResult<Arc<T>>
    where
        T: Any + Send + Sync,
        I: IntoIterator<Item = RegisterOption>;
}
