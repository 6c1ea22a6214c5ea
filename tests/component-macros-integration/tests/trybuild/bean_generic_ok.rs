use component_macros::Bean;
use di_abstractions::Bean as _;
use infrastructure_common::Initializer;
use std::sync::Arc;

struct Backend;

#[derive(Bean)]
struct Holder<T: Send + Sync + 'static> {
    #[bean(name = "backend", optional)]
    backend: Option<Arc<Backend>>,
    payload: T,
}

impl<T: Send + Sync + 'static> Initializer for Holder<T> {}

fn main() {
    let descriptor = Holder::<u32>::descriptor();
    assert!(descriptor.bindings()[0].tag().is_optional());

    let holder = Holder {
        backend: None,
        payload: 7u32,
    };
    assert!(holder.backend.is_none());
    assert_eq!(holder.payload, 7);
}
