//! # 依赖注入具体实现
//!
//! 提供按名称注册组件的容器、字段绑定器以及冻结后的只读容器。
//!
//! ```rust
//! use di_abstractions::{name, Bean, BeanDescriptor, BeanLookup, Keeper};
//! use di_impl::Container;
//! use infrastructure_common::Initializer;
//! use std::sync::Arc;
//!
//! struct Greeter;
//!
//! #[derive(Default)]
//! struct Controller {
//!     greeter: Option<Arc<Greeter>>,
//! }
//!
//! impl Initializer for Controller {}
//!
//! impl Bean for Controller {
//!     fn descriptor() -> BeanDescriptor<Self> {
//!         BeanDescriptor::new().inject("greeter", "greeter", |ctl: &mut Self, dep| {
//!             ctl.greeter = Some(dep);
//!         })
//!     }
//! }
//!
//! let mut container = Container::default();
//! container.register_value(Greeter, [name("greeter")])?;
//! let controller = container.register(Controller::default(), [name("controller")])?;
//! assert!(controller.greeter.is_some());
//! assert!(container.contains("controller"));
//! # Ok::<(), infrastructure_common::KeeperError>(())
//! ```

mod binder;
mod container;
mod frozen;
mod global;

pub use binder::Binder;
pub use container::Container;
pub use frozen::FrozenContainer;
pub use global::{global_keeper, install_global};
