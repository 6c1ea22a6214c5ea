//! Centralized integration tests for component-macros crate

use component_macros::Bean;
use di_abstractions::{name, BeanLookup, Keeper};
use di_impl::Container;
use infrastructure_common::{Initializer, KeeperError};
use std::sync::{Arc, Mutex};

/// 记录初始化顺序
#[derive(Debug, Default)]
struct Journal {
    entries: Mutex<Vec<&'static str>>,
}

impl Journal {
    fn record(&self, entry: &'static str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    fn snapshot(&self) -> Vec<&'static str> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Bean)]
struct Storage {
    #[bean(name = "journal")]
    journal: Option<Arc<Journal>>,
}

impl Initializer for Storage {
    fn after_property_set(&mut self) {
        if let Some(journal) = &self.journal {
            journal.record("storage");
        }
    }
}

#[derive(Debug, Default, Bean)]
struct Indexer {
    #[bean(name = "journal")]
    journal: Option<Arc<Journal>>,
    #[bean(name = "storage")]
    storage: Option<Arc<Storage>>,
}

impl Initializer for Indexer {
    fn after_property_set(&mut self) {
        if let (Some(journal), Some(_)) = (&self.journal, &self.storage) {
            journal.record("indexer");
        }
    }
}

#[test]
fn test_initializers_follow_registration_order() {
    let mut container = Container::default();
    let journal = container
        .register_value(Journal::default(), [name("journal")])
        .unwrap();
    container
        .register(Storage::default(), [name("storage")])
        .unwrap();
    let indexer = container
        .register(Indexer::default(), [name("indexer")])
        .unwrap();

    assert_eq!(journal.snapshot(), vec!["storage", "indexer"]);
    assert!(Arc::ptr_eq(
        indexer.storage.as_ref().unwrap(),
        &container.get::<Storage>("storage").unwrap()
    ));
}

#[test]
fn test_dependencies_must_be_registered_first() {
    let mut container = Container::default();
    container
        .register_value(Journal::default(), [name("journal")])
        .unwrap();

    let err = container
        .register(Indexer::default(), [name("indexer")])
        .unwrap_err();

    assert!(matches!(err, KeeperError::Dependency { .. }));
    assert_eq!(container.len(), 1);
}
