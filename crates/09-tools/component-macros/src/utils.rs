//! 宏工具函数

use syn::{GenericArgument, PathArguments, Result, Type};

/// 被注入字段的形态
#[derive(Debug, Clone)]
pub enum InjectedField {
    /// `Arc<T>`
    Shared(Type),
    /// `Option<Arc<T>>`
    OptionalShared(Type),
}

/// 从注入字段类型中提取依赖类型
pub fn injected_type(ty: &Type) -> Result<InjectedField> {
    if is_wrapper_type(ty, "Option") {
        if let Some(inner) = extract_generic_type(ty) {
            if is_wrapper_type(inner, "Arc") {
                if let Some(dependency) = extract_generic_type(inner) {
                    return Ok(InjectedField::OptionalShared(dependency.clone()));
                }
            }
        }
    } else if is_wrapper_type(ty, "Arc") {
        if let Some(dependency) = extract_generic_type(ty) {
            return Ok(InjectedField::Shared(dependency.clone()));
        }
    }

    Err(syn::Error::new_spanned(
        ty,
        "注入字段的类型必须是 Arc<T> 或 Option<Arc<T>>",
    ))
}

/// 从类型中提取第一个泛型参数
pub fn extract_generic_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

/// 检查类型路径的最后一段是否为指定名称
pub fn is_wrapper_type(ty: &Type, wrapper: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == wrapper),
        _ => false,
    }
}
