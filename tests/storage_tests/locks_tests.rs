//! Tests for NameLocks
//!
//! These tests verify:
//! - Operations on one name are mutually exclusive
//! - Different names do not block each other
//! - Table entries are released once unused

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use filestash::storage::{FileName, NameLocks};

fn name(s: &str) -> FileName {
    FileName::parse(s).unwrap()
}

#[test]
fn test_lock_and_release_clears_table() {
    let locks = NameLocks::new();

    {
        let _guard = locks.lock(&name("a.txt"));
        assert_eq!(locks.active(), 1);
    }

    assert_eq!(locks.active(), 0);
}

#[test]
fn test_different_names_do_not_block() {
    let locks = Arc::new(NameLocks::new());
    let _a = locks.lock(&name("a.txt"));

    let (tx, rx) = mpsc::channel();
    let locks_clone = Arc::clone(&locks);
    thread::spawn(move || {
        let _b = locks_clone.lock(&name("b.txt"));
        tx.send(()).unwrap();
    });

    rx.recv_timeout(Duration::from_secs(5))
        .expect("lock on a different name should not wait");
}

#[test]
fn test_same_name_blocks_until_released() {
    let locks = Arc::new(NameLocks::new());
    let guard = locks.lock(&name("a.txt"));

    let acquired = Arc::new(AtomicBool::new(false));
    let handle = {
        let locks = Arc::clone(&locks);
        let acquired = Arc::clone(&acquired);
        thread::spawn(move || {
            let _g = locks.lock(&name("a.txt"));
            acquired.store(true, Ordering::SeqCst);
        })
    };

    thread::sleep(Duration::from_millis(100));
    assert!(!acquired.load(Ordering::SeqCst));

    drop(guard);
    handle.join().unwrap();

    assert!(acquired.load(Ordering::SeqCst));
    assert_eq!(locks.active(), 0);
}

#[test]
fn test_mutual_exclusion_under_contention() {
    let locks = Arc::new(NameLocks::new());
    let inside = Arc::new(AtomicUsize::new(0));
    let max_inside = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let locks = Arc::clone(&locks);
            let inside = Arc::clone(&inside);
            let max_inside = Arc::clone(&max_inside);
            thread::spawn(move || {
                for _ in 0..50 {
                    let _g = locks.lock(&name("shared"));
                    let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                    max_inside.fetch_max(now, Ordering::SeqCst);
                    thread::yield_now();
                    inside.fetch_sub(1, Ordering::SeqCst);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(max_inside.load(Ordering::SeqCst), 1);
    assert_eq!(locks.active(), 0);
}
