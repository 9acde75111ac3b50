mod common;

use appkit_core::api::{ComponentInfo, ComponentRecord, ExecutorHandle, RecordStore, Token};
use common::component;
use std::sync::Arc;

#[test]
fn count_tracks_live_entries_across_threads() {
    let store = RecordStore::new();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..50 {
                    let rec = component("Worker");
                    let token = rec.token();
                    store.add_record(token, rec);
                    if i % 2 == 0 {
                        assert!(store.remove_record(token).is_some());
                    }
                }
            });
        }
    });

    assert_eq!(store.count(), 100);
    assert_eq!(store.all_tokens().len(), 100);
}

#[test]
fn reused_token_never_resolves_old_key() {
    let store = RecordStore::new();
    let token = Token::new();
    let info = Arc::new(ComponentInfo::new("com.example.demo", "Main"));

    store.add_record(token, Arc::new(ComponentRecord::new(info.clone(), token)));
    let first_key = store.key_for(token).unwrap();
    store.remove_record(token);

    let second = Arc::new(ComponentRecord::new(info, token));
    store.add_record(token, second.clone());
    let second_key = store.key_for(token).unwrap();

    assert!(store.record_for_key(first_key).is_none());
    let resolved = store.record_for_key(second_key).unwrap();
    assert!(Arc::ptr_eq(&resolved, &second));
}

#[test]
fn executor_binds_to_current_component() {
    let store = RecordStore::new();
    let a = component("A");
    let b = component("B");
    store.add_record(a.token(), a.clone());
    store.add_record(b.token(), b.clone());

    store.set_current_token(b.token());
    assert!(store.bind_executor(ExecutorHandle::new("loop-b", 2u8)));

    assert!(a.executor().is_none());
    let bound = b.executor().unwrap();
    assert_eq!(bound.label(), "loop-b");
    assert_eq!(bound.downcast_ref::<u8>(), Some(&2));
}

#[test]
fn executor_binding_follows_current_token_while_it_moves() {
    let store = RecordStore::new();
    let a = component("A");
    let b = component("B");
    store.add_record(a.token(), a.clone());
    store.set_current_token(a.token());
    let handle = ExecutorHandle::new("loop", ());

    // The writer only ever drops the record of a token that is no longer
    // current, so the current token always has a live record.
    std::thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..200 {
                store.add_record(b.token(), b.clone());
                store.set_current_token(b.token());
                store.remove_record(a.token());
                store.add_record(a.token(), a.clone());
                store.set_current_token(a.token());
                store.remove_record(b.token());
            }
        });
        for _ in 0..400 {
            assert!(store.bind_executor(handle.clone()));
        }
    });

    assert_eq!(store.current_token(), Some(a.token()));
    assert!(store.get_record(b.token()).is_none());
    assert!(store.bind_executor(handle.clone()));
    assert!(a.executor().is_some_and(|bound| bound.ptr_eq(&handle)));
}
