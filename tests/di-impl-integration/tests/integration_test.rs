//! Centralized integration tests for di-impl crate

use component_macros::Bean;
use di_abstractions::{name, BeanLookup, Keeper, KeeperOption};
use di_impl::Container;
use infrastructure_common::{DependencyError, Initializer, KeeperError};
use std::sync::Arc;
use tracing::info;

/// 测试组件
#[derive(Debug, Default, Bean)]
struct HelloSrv {
    word: String,
}

impl HelloSrv {
    fn hello(&self) -> String {
        info!("pass HelloSrv...");
        format!("Hello World {}", self.word)
    }
}

impl Initializer for HelloSrv {}

#[derive(Debug, Default, Bean)]
struct HelloCtl {
    #[bean(name = "helloService")]
    hello_srv: Option<Arc<HelloSrv>>,
}

impl HelloCtl {
    fn hello(&self) -> Option<String> {
        info!("pass HelloCtl...");
        self.hello_srv.as_ref().map(|srv| srv.hello())
    }
}

impl Initializer for HelloCtl {}

#[derive(Debug, Default, Bean)]
struct Greeter {
    #[bean(name = "helloService")]
    primary: Option<Arc<HelloSrv>>,
    #[bean(name = "fallbackService", optional)]
    fallback: Option<Arc<HelloSrv>>,
    init_calls: usize,
    greeting_at_init: Option<String>,
}

impl Initializer for Greeter {
    fn after_property_set(&mut self) {
        self.init_calls += 1;
        self.greeting_at_init = self.primary.as_ref().map(|srv| srv.hello());
    }
}

fn with_hello_service(word: &str) -> (Container, Arc<HelloSrv>) {
    let mut container = Container::default();
    let srv = container
        .register(
            HelloSrv {
                word: word.to_string(),
            },
            [name("helloService")],
        )
        .unwrap();
    (container, srv)
}

#[test]
fn test_hello_controller_delegates_to_registered_service() {
    let (mut container, srv) = with_hello_service("keeper");

    container
        .register(HelloCtl::default(), [name("helloCtl")])
        .unwrap();

    let ctl = container.get::<HelloCtl>("helloCtl").unwrap();
    assert_eq!(ctl.hello().as_deref(), Some("Hello World keeper"));
    assert_eq!(ctl.hello(), Some(srv.hello()));
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let (mut container, srv) = with_hello_service("first");

    let err = container
        .register(
            HelloSrv {
                word: "second".to_string(),
            },
            [name("helloService")],
        )
        .unwrap_err();

    assert!(err.is_conflict());
    assert!(container.find("helloService").unwrap().is_same(&srv));
    assert_eq!(
        container.get::<HelloSrv>("helloService").unwrap().word,
        "first"
    );
}

#[test]
fn test_round_trip_lookup() {
    let (container, srv) = with_hello_service("x");

    assert!(container.find("helloService").unwrap().is_same(&srv));
    assert!(container.all()["helloService"].is_same(&srv));
}

#[test]
fn test_optional_miss_leaves_field_empty() {
    let (mut container, _) = with_hello_service("x");

    let greeter = container
        .register(Greeter::default(), [name("greeter")])
        .unwrap();

    assert!(greeter.primary.is_some());
    assert!(greeter.fallback.is_none());
}

#[test]
fn test_required_miss_fails_and_is_not_registered() {
    let mut container = Container::default();

    let err = container
        .register(HelloCtl::default(), [name("helloCtl")])
        .unwrap_err();

    assert_eq!(
        err,
        KeeperError::from(DependencyError::unresolved("helloService", "HelloCtl"))
    );
    assert!(!container.all().contains_key("helloCtl"));
}

#[test]
fn test_hook_fires_once_after_fields_resolved() {
    let (mut container, _) = with_hello_service("hook");

    let greeter = container
        .register(Greeter::default(), [name("greeter")])
        .unwrap();

    assert_eq!(greeter.init_calls, 1);
    assert_eq!(
        greeter.greeting_at_init.as_deref(),
        Some("Hello World hook")
    );
}

#[test]
fn test_provide_runs_hook_without_registering() {
    let (container, _) = with_hello_service("root");

    let mut greeter = Greeter::default();
    container.provide(&mut greeter).unwrap();

    assert_eq!(greeter.init_calls, 1);
    assert!(!container.contains("greeter"));
}

#[test]
fn test_snapshot_isolation() {
    let (container, srv) = with_hello_service("x");

    let mut snapshot = container.all();
    snapshot.clear();

    assert!(container.find("helloService").unwrap().is_same(&srv));
    assert_eq!(container.len(), 1);
}

#[test]
fn test_frozen_container_serves_same_instances() {
    let (mut container, srv) = with_hello_service("frozen");
    container
        .register(HelloCtl::default(), [name("helloCtl")])
        .unwrap();

    let frozen = container.freeze();
    let worker = {
        let frozen = frozen.clone();
        std::thread::spawn(move || frozen.get::<HelloCtl>("helloCtl").unwrap().hello())
    };

    assert_eq!(worker.join().unwrap(), Some(srv.hello()));
    assert!(frozen.find("helloService").unwrap().is_same(&srv));
}

#[test]
fn test_strict_container_rejects_unknown_modifiers() {
    #[derive(Debug, Default, Bean)]
    struct Lazy {
        #[bean(name = "helloService,lazy")]
        srv: Option<Arc<HelloSrv>>,
    }

    impl Initializer for Lazy {}

    let mut container = Container::new([KeeperOption::StrictTags(true)]);
    container
        .register_value(HelloSrv::default(), [name("helloService")])
        .unwrap();

    let err = container
        .register(Lazy::default(), [name("lazy")])
        .unwrap_err();

    assert!(matches!(
        err,
        KeeperError::Dependency {
            source: DependencyError::MalformedTag { .. }
        }
    ));
}
