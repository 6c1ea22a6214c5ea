//! 字段绑定器

use di_abstractions::{Assignment, Bean, BeanRef};
use infrastructure_common::{DependencyError, DependencyResult, Initializer};
use std::collections::HashMap;
use tracing::{debug, trace};

/// 字段绑定器
///
/// 按描述符声明顺序解析依赖。所有依赖都解析成功后才统一赋值，
/// 任何一个依赖失败时目标保持原样。
#[derive(Debug, Clone, Copy)]
pub struct Binder<'a> {
    entries: &'a HashMap<String, BeanRef>,
    strict_tags: bool,
}

impl<'a> Binder<'a> {
    /// 基于注册表条目创建绑定器
    pub fn new(entries: &'a HashMap<String, BeanRef>, strict_tags: bool) -> Self {
        Self {
            entries,
            strict_tags,
        }
    }

    /// 为目标注入依赖并调用初始化回调
    pub fn bind<T: Bean>(&self, target: &mut T) -> DependencyResult<()> {
        let descriptor = T::descriptor();
        let owner = descriptor.type_info();
        let mut pending: Vec<Assignment<T>> = Vec::with_capacity(descriptor.bindings().len());

        for binding in descriptor.bindings() {
            let tag = binding.tag();
            if self.strict_tags && !tag.unknown_modifiers().is_empty() {
                return Err(DependencyError::MalformedTag {
                    owner: owner.name.clone(),
                    field: binding.field().to_string(),
                    tag: tag.to_string(),
                });
            }

            let Some(bean) = self.entries.get(tag.name()) else {
                if tag.is_optional() {
                    trace!("可选依赖缺失，跳过: {}.{} -> {}", owner, binding.field(), tag.name());
                    continue;
                }
                return Err(DependencyError::unresolved(tag.name(), owner.name.clone()));
            };

            let assignment =
                binding
                    .resolve(bean)
                    .ok_or_else(|| DependencyError::TypeMismatch {
                        dependency: tag.name().to_string(),
                        actual_type: bean.type_name().to_string(),
                        owner: owner.name.clone(),
                        field: binding.field().to_string(),
                        declared_type: binding.declared_type().name.clone(),
                    })?;
            pending.push(assignment);
        }

        let assigned = pending.len();
        for assignment in pending {
            assignment(target);
        }

        target.after_property_set();

        debug!("完成依赖注入: {} ({} 个字段)", owner, assigned);
        Ok(())
    }
}
