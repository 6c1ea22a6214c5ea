//! 构建阶段的组件容器

use crate::binder::Binder;
use crate::frozen::FrozenContainer;
use di_abstractions::{
    Bean, BeanLookup, BeanRef, ContainerConfig, Keeper, KeeperOption, RegisterOption,
    RegisterOptions,
};
use infrastructure_common::{KeeperError, KeeperResult, TypeInfo};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// 按名称管理组件的容器
///
/// 注册需要 `&mut self`，构建阶段只能由一个调用方顺序驱动。
/// 构建完成后调用 [`Container::freeze`] 得到可共享的只读容器。
#[derive(Debug, Default)]
pub struct Container {
    entries: HashMap<String, BeanRef>,
    config: ContainerConfig,
}

impl Container {
    /// 使用给定选项创建空容器
    pub fn new(options: impl IntoIterator<Item = KeeperOption>) -> Self {
        Self::with_config(options.into_iter().collect())
    }

    /// 使用配置创建空容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
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

    /// 结束构建阶段
    pub fn freeze(self) -> FrozenContainer {
        info!("[{}] 容器冻结，共 {} 个组件", self.config.label, self.entries.len());
        FrozenContainer::new(self.entries, self.config)
    }

    fn binder(&self) -> Binder<'_> {
        Binder::new(&self.entries, self.config.strict_tags)
    }

    fn checked_options(
        &self,
        options: impl IntoIterator<Item = RegisterOption>,
        type_info: &TypeInfo,
    ) -> KeeperResult<RegisterOptions> {
        let options: RegisterOptions = options.into_iter().collect();
        options.validate()?;
        if self.entries.contains_key(&options.name) {
            return Err(KeeperError::DuplicateName {
                name: options.name,
                type_name: type_info.name.clone(),
            });
        }
        Ok(options)
    }

    fn insert<T: Any + Send + Sync>(&mut self, name: String, instance: T) -> Arc<T> {
        let instance = Arc::new(instance);
        debug!(
            "[{}] 注册组件: {} ({})",
            self.config.label,
            name,
            std::any::type_name::<T>()
        );
        self.entries
            .insert(name, BeanRef::new(Arc::clone(&instance)));
        instance
    }
}

impl BeanLookup for Container {
    fn find(&self, name: &str) -> Option<BeanRef> {
        self.entries.get(name).cloned()
    }

    fn all(&self) -> HashMap<String, BeanRef> {
        self.entries.clone()
    }

    fn provide<T: Bean>(&self, target: &mut T) -> KeeperResult<()> {
        self.binder().bind(target)?;
        Ok(())
    }


    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Keeper for Container {
    fn register<T, I>(&mut self, mut bean: T, options: I) -> KeeperResult<Arc<T>>
    where
        T: Bean,
        I: IntoIterator<Item = RegisterOption>,
    {
        let options = self.checked_options(options, &TypeInfo::of::<T>())?;
        self.binder().bind(&mut bean)?;
        Ok(self.insert(options.name, bean))
    }

    fn register_value<T, I>(&mut self, value: T, options: I) -> KeeperResult<Arc<T>>
    where
        T: Any + Send + Sync,
        I: IntoIterator<Item = RegisterOption>,
    {
        let options = self.checked_options(options, &TypeInfo::of::<T>())?;
        Ok(self.insert(options.name, value))
    }
}
