use component_macros::Bean;
use di_abstractions::{name, Bean as _, Keeper};
use di_impl::Container;
use infrastructure_common::Initializer;
use std::sync::Arc;

struct Clock;

#[derive(Default, Bean)]
struct Scheduler {
    #[bean(name = "clock")]
    clock: Option<Arc<Clock>>,
    ready: bool,
}

impl Initializer for Scheduler {
    fn after_property_set(&mut self) {
        self.ready = self.clock.is_some();
    }
}

fn main() {
    assert_eq!(Scheduler::descriptor().bindings().len(), 1);

    let mut container = Container::default();
    container.register_value(Clock, [name("clock")]).unwrap();
    let scheduler = container
        .register(Scheduler::default(), [name("scheduler")])
        .unwrap();
    assert!(scheduler.ready);
}
