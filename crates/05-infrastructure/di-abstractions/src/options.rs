//! 注册选项与容器选项

use infrastructure_common::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// 组件名称中禁止出现的字符
pub const RESERVED_NAME_CHAR: char = '`';

/// 注册选项
///
/// 目前只有组件名称一项，通过 [`name`] 创建。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOption {
    /// 组件在注册表中的名称
    Name(String),
}

/// 指定组件名称的注册选项
///
/// ```rust
/// use di_abstractions::{name, RegisterOptions};
///
/// let options: RegisterOptions = [name("ro")].into_iter().collect();
/// assert_eq!(options.name, "ro");
/// ```
pub fn name(value: impl Into<String>) -> RegisterOption {
    RegisterOption::Name(value.into())
}

/// 合并后的注册选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterOptions {
    /// 组件名称
    pub name: String,
}

impl RegisterOptions {
    /// 应用单个选项，后出现的覆盖先出现的
    pub fn apply(&mut self, option: RegisterOption) {
        match option {
            RegisterOption::Name(name) => self.name = name,
        }
    }

    /// 验证注册选项
    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name.contains(RESERVED_NAME_CHAR) {
            return Err(ValidationError::InvalidName {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl FromIterator<RegisterOption> for RegisterOptions {
    fn from_iter<I: IntoIterator<Item = RegisterOption>>(iter: I) -> Self {
        let mut options = Self::default();
        for option in iter {
            options.apply(option);
        }
        options
    }
}

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 容器标识，出现在日志中
    pub label: String,
    /// 是否拒绝含有未知修饰符的依赖标签
    pub strict_tags: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            label: "keeper".to_string(),
            strict_tags: false,
        }
    }
}

/// 容器选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeeperOption {
    /// 整体替换配置
    Config(ContainerConfig),
    /// 设置严格标签模式
    StrictTags(bool),
    /// 设置容器标识
    Label(String),
}

impl KeeperOption {
    /// 应用到容器配置
    pub fn apply(self, config: &mut ContainerConfig) {
        match self {
            Self::Config(replacement) => *config = replacement,
            Self::StrictTags(strict) => config.strict_tags = strict,
            Self::Label(label) => config.label = label,
        }
    }
}

impl FromIterator<KeeperOption> for ContainerConfig {
    fn from_iter<I: IntoIterator<Item = KeeperOption>>(iter: I) -> Self {
        let mut config = Self::default();
        for option in iter {
            option.apply(&mut config);
        }
        config
    }
}
