//! 冻结后的只读容器

use crate::binder::Binder;
use di_abstractions::{Bean, BeanLookup, BeanRef, ContainerConfig};
use infrastructure_common::KeeperResult;
use std::collections::HashMap;
use std::sync::Arc;

/// 只读容器
///
/// 克隆成本很低，可以在线程或任务之间共享。不再接受注册，
/// 但仍可以通过 [`BeanLookup::provide`] 为组合根注入依赖。
#[derive(Debug, Clone)]
pub struct FrozenContainer {
    entries: Arc<HashMap<String, BeanRef>>,
    config: Arc<ContainerConfig>,
}

impl FrozenContainer {
    pub(crate) fn new(entries: HashMap<String, BeanRef>, config: ContainerConfig) -> Self {
        Self {
            entries: Arc::new(entries),
            config: Arc::new(config),
        }
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 已注册组件数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 已注册的组件名称（无序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl BeanLookup for FrozenContainer {
    fn find(&self, name: &str) -> Option<BeanRef> {
        self.entries.get(name).cloned()
    }

    fn all(&self) -> HashMap<String, BeanRef> {
        self.entries.as_ref().clone()
    }

    fn provide<T: Bean>(&self, target: &mut T) -> KeeperResult<()> {
        Binder::new(&self.entries, self.config.strict_tags).bind(target)?;
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
