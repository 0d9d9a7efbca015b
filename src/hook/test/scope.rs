use std::collections::HashMap;

use super::*;
use crate::hook::{resolve_scope, EventKind};

fn directory() -> HashMap<String, ChannelId> {
    HashMap::from([
        ("general".to_string(), ChannelId::new(100)),
        ("mod-log".to_string(), ChannelId::new(200)),
    ])
}

/// Tests resolving a mix of known and unknown channel names.
///
/// Expected: scope {100}, "missing" reported as unresolved
#[test]
fn unresolved_names_are_dropped() {
    let resolution = resolve_scope(&directory(), &["general", "missing"]);

    assert_eq!(resolution.scope, scope_of(&[100]));
    assert_eq!(resolution.unresolved, vec!["missing".to_string()]);
    assert!(resolution.scope.admits(ChannelId::new(100)));
    assert!(!resolution.scope.admits(ChannelId::new(200)));
}

/// Tests resolving an empty list of names.
///
/// Expected: global scope admitting every channel
#[test]
fn empty_names_give_global_scope() {
    let names: [&str; 0] = [];
    let resolution = resolve_scope(&directory(), &names);

    assert!(resolution.scope.is_global());
    assert!(resolution.unresolved.is_empty());
    assert!(resolution.scope.admits(ChannelId::new(12345)));
}

/// Tests that a list where nothing resolves degrades to a global scope.
///
/// Expected: global scope, every name unresolved
#[test]
fn fully_unresolved_list_is_global() {
    let resolution = resolve_scope(&directory(), &["nope", "gone"]);

    assert!(resolution.scope.is_global());
    assert_eq!(resolution.unresolved.len(), 2);
}

/// Tests that a resolved scope filters dispatch.
///
/// Expected: hook runs for #general only
#[tokio::test]
async fn resolved_scope_filters_dispatch() {
    let log = InvocationLog::default();
    let mut registry = registry();
    let resolution = resolve_scope(&directory(), &["general", "missing"]);
    registry.register(EventKind::MessageCreate, resolution.scope, log.hook("general"));
    let dispatcher = crate::hook::Dispatcher::new(registry);

    dispatcher
        .dispatch(&TestEvent::new(EventKind::MessageCreate, Some(200)))
        .await
        .unwrap();
    dispatcher
        .dispatch(&TestEvent::new(EventKind::MessageCreate, Some(100)))
        .await
        .unwrap();

    assert_eq!(log.entries(), vec!["general"]);
}
