//! `#[derive(Bean)]` 实现

use crate::utils::{injected_type, InjectedField};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Attribute, Data, DeriveInput, Fields, Index, LitStr, Result};

/// 字段级参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectArgs {
    /// 依赖标签，`name[,optional]`
    pub tag: String,
    /// 依赖缺失时是否跳过
    pub optional: bool,
}

/// 结构体上不接受 `#[bean(...)]`，初始化回调由 `Initializer` 实现提供
pub fn reject_struct_args(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("bean")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "结构体不支持 #[bean(...)]，注入完成后的回调请实现 Initializer::after_property_set",
        )),
        None => Ok(()),
    }
}

/// 解析字段上的 `#[bean(...)]`，没有该属性时返回 `None`
pub fn parse_inject_args(attrs: &[Attribute]) -> Result<Option<InjectArgs>> {
    let mut found = false;
    let mut name: Option<String> = None;
    let mut optional = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("bean")) {
        found = true;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("optional") {
                optional = true;
                Ok(())
            } else {
                Err(meta.error("不支持的字段参数，可用参数: name, optional"))
            }
        })?;
    }

    if !found {
        return Ok(None);
    }
    let Some(mut tag) = name else {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "注入字段必须指定 #[bean(name = \"...\")]",
        ));
    };
    if optional {
        tag.push_str(",optional");
    }
    let optional = tag
        .split(',')
        .skip(1)
        .any(|modifier| modifier.trim() == "optional");
    Ok(Some(InjectArgs { tag, optional }))
}

/// 实现 #[derive(Bean)] 宏
pub fn derive_bean_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    reject_struct_args(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Bean)] 只能用于结构体",
            ))
        }
    };

    let members: Vec<_> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                let ident = field.ident.clone();
                let label = ident.as_ref().map(ToString::to_string).unwrap_or_default();
                (field, ident.to_token_stream(), label)
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, field)| (field, Index::from(i).to_token_stream(), i.to_string()))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let mut injections = Vec::new();
    for (field, member, label) in members {
        let Some(inject) = parse_inject_args(&field.attrs)? else {
            continue;
        };
        let tag = inject.tag;
        let injection = match injected_type(&field.ty)? {
            InjectedField::Shared(_) if inject.optional => {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "可选依赖字段的类型必须是 Option<Arc<T>>，缺失时字段保持为 None",
                ))
            }
            InjectedField::Shared(dependency) => quote! {
                .inject::<#dependency, _>(#label, #tag, |bean: &mut Self, dependency| {
                    bean.#member = dependency;
                })
            },
            InjectedField::OptionalShared(dependency) => quote! {
                .inject::<#dependency, _>(#label, #tag, |bean: &mut Self, dependency| {
                    bean.#member = ::core::option::Option::Some(dependency);
                })
            },
        };
        injections.push(injection);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Bean for #struct_name #ty_generics #where_clause {
            fn descriptor() -> ::di_abstractions::BeanDescriptor<Self> {
                ::di_abstractions::BeanDescriptor::new()
                    #(#injections)*
            }
        }
    })
}
