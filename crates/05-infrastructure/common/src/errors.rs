//! 错误类型定义

use thiserror::Error;

/// 注册选项验证错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("组件名称不能为空")]
    EmptyName,

    #[error("组件名称无效: {name:?}, 名称中不能包含反引号")]
    InvalidName { name: String },
}

/// 依赖注入错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("依赖加载失败: {name} (所属组件 {owner})")]
    Unresolved { name: String, owner: String },

    #[error(
        "依赖类型不匹配: {dependency}@{actual_type} 无法注入到 {owner}.{field}@{declared_type}"
    )]
    TypeMismatch {
        dependency: String,
        actual_type: String,
        owner: String,
        field: String,
        declared_type: String,
    },

    #[error("依赖标签无效: {owner}.{field} 的标签 {tag:?} 含有未知修饰符")]
    MalformedTag {
        owner: String,
        field: String,
        tag: String,
    },
}

impl DependencyError {
    /// 创建依赖缺失错误
    pub fn unresolved(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::Unresolved {
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// 依赖名称
    pub fn dependency_name(&self) -> Option<&str> {
        match self {
            Self::Unresolved { name, .. } => Some(name),
            Self::TypeMismatch { dependency, .. } => Some(dependency),
            Self::MalformedTag { .. } => None,
        }
    }
}

/// 注册表错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeeperError {
    #[error("注册选项无效: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("重复注册: {name} 已被注册, 拒绝类型为 {type_name} 的新实例")]
    DuplicateName { name: String, type_name: String },

    #[error(transparent)]
    Dependency {
        #[from]
        source: DependencyError,
    },

    #[error("全局注册表已安装")]
    GlobalAlreadyInstalled,
}

impl KeeperError {
    /// 是否为名称冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type KeeperResult<T> = Result<T, KeeperError>;
