//! # Component Macros
//!
//! 这个 crate 提供了生成组件依赖描述符的派生宏。
//!
//! ## 核心宏
//!
//! - [`Bean`](macro@Bean) - 为结构体实现 `di_abstractions::Bean`
//!
//! ## 使用示例
//!
//! ```rust
//! use component_macros::Bean;
//! use infrastructure_common::Initializer;
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! pub struct HelloSrv;
//!
//! #[derive(Default, Bean)]
//! pub struct HelloCtl {
//!     #[bean(name = "helloService")]
//!     hello_srv: Option<Arc<HelloSrv>>,
//!     #[bean(name = "metrics", optional)]
//!     metrics: Option<Arc<String>>,
//! }
//!
//! impl Initializer for HelloCtl {
//!     fn after_property_set(&mut self) {
//!         assert!(self.hello_srv.is_some());
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 组件派生宏
///
/// 根据字段上的 `#[bean(...)]` 属性生成依赖描述符，赋值代码生成在结构体所在模块内，
/// 因此私有字段同样可以注入。
///
/// # 字段参数
///
/// - `name = "dep"` - 依赖组件名称，也可写作 `name = "dep,optional"`
/// - `optional` - 依赖缺失时跳过该字段
///
/// 被注入字段的类型必须是 `Arc<T>` 或 `Option<Arc<T>>`。可选依赖只能使用
/// `Option<Arc<T>>`，缺失时字段保持为 `None`；`Arc<T>` 字段要求构造时先放入占位值，
/// 依赖注入后被替换。
///
/// 结构体本身不接受参数。组件还需要实现 `Initializer`，绑定器在字段赋值完成后
/// 总会调用它；不需要回调时写一个空实现即可。
///
/// # 示例
///
/// ```rust
/// use component_macros::Bean;
/// use infrastructure_common::Initializer;
/// use std::sync::Arc;
///
/// pub struct Database;
///
/// #[derive(Bean)]
/// pub struct Repository {
///     #[bean(name = "db")]
///     db: Option<Arc<Database>>,
/// }
///
/// impl Initializer for Repository {}
/// ```
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::derive_bean_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
