//! 依赖标签解析
//!
//! 标签格式为 `name[,optional]`，第一段为依赖组件名称，其余为修饰符。

use std::fmt;

/// 可选依赖修饰符
pub const OPTIONAL_MODIFIER: &str = "optional";

/// 已解析的依赖标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTag {
    name: String,
    optional: bool,
    unknown_modifiers: Vec<String>,
}

impl DependencyTag {
    /// 解析依赖标签
    ///
    /// 各段首尾空白会被去除。未识别的修饰符会被记录，是否拒绝由容器配置决定。
    pub fn parse(tag: &str) -> Self {
        let mut segments = tag.split(',').map(str::trim);
        let name = segments.next().unwrap_or_default().to_string();

        let mut optional = false;
        let mut unknown_modifiers = Vec::new();
        for modifier in segments {
            if modifier == OPTIONAL_MODIFIER {
                optional = true;
            } else {
                unknown_modifiers.push(modifier.to_string());
            }
        }

        Self {
            name,
            optional,
            unknown_modifiers,
        }
    }

    /// 依赖组件名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 是否为可选依赖
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// 未识别的修饰符
    pub fn unknown_modifiers(&self) -> &[String] {
        &self.unknown_modifiers
    }
}

impl fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.optional {
            write!(f, ",{OPTIONAL_MODIFIER}")?;
        }
        for modifier in &self.unknown_modifiers {
            write!(f, ",{modifier}")?;
        }
        Ok(())
    }
}
