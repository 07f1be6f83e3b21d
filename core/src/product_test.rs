//! Tests for lazy field materialization.

use crate::{Builder, Product, String, ToString, Vec, format};
use crate::dynamic::Func;
use crate::test_utils::init_test_logging;
use core::sync::atomic::{AtomicUsize, Ordering};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

type Prd = Product<&'static str, i64>;

#[test]
fn test_forward_reference() {
    init_test_logging();

    let product = Builder::<&'static str, i64>::create()
        .with("fn", |p: &Prd| p.get(&"prop").unwrap() + 10)
        .with("prop", |_| 5)
        .build();

    assert_eq!(product.get(&"prop"), Some(5));
    assert_eq!(product.get(&"fn"), Some(15));
}

#[test]
fn test_backward_reference() {
    let product = Builder::<&'static str, i64>::create()
        .with("prop", |_| 5)
        .with("fn", |p: &Prd| p.get(&"prop").unwrap() + 10)
        .build();

    assert_eq!(product.get(&"fn"), Some(15));
}

#[test]
fn test_self_recursion() {
    type Countdown = Func<u32, Vec<u32>>;

    let product = Builder::<&'static str, Countdown>::create()
        .with("fn", |p| {
            let p = p.clone();
            Arc::new(move |a: u32| {
                if a == 0 {
                    return Vec::from([0]);
                }
                let mut out = Vec::from([a]);
                out.extend(p.get(&"fn").unwrap()(a - 1));
                out
            })
        })
        .build();

    let countdown = product.get(&"fn").unwrap();
    assert_eq!(countdown(5), [5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_mutual_recursion() {
    type Parity = Func<u32, bool>;

    let product = Builder::<&'static str, Parity>::create()
        .with("even", |s| {
            let s = s.clone();
            Arc::new(move |n: u32| n == 0 || !s.get(&"odd").unwrap()(n - 1))
        })
        .with("odd", |s| {
            let s = s.clone();
            Arc::new(move |n: u32| n != 0 && !s.get(&"even").unwrap()(n - 1))
        })
        .build();

    let even = product.get(&"even").unwrap();
    let odd = product.get(&"odd").unwrap();
    assert!(even(0));
    assert!(!odd(0));
    assert!(even(10));
    assert!(!odd(10));
}

#[test]
fn test_mutual_recursion_parity() {
    type Parity = Func<u32, bool>;

    let product = Builder::<&'static str, Parity>::create()
        .with("even", |s| {
            let s = s.clone();
            Arc::new(move |n: u32| n == 0 || s.get(&"odd").unwrap()(n - 1))
        })
        .with("odd", |s| {
            let s = s.clone();
            Arc::new(move |n: u32| n != 0 && s.get(&"even").unwrap()(n - 1))
        })
        .build();

    let even = product.get(&"even").unwrap();
    let odd = product.get(&"odd").unwrap();
    for n in 0..12_u32 {
        assert_eq!(even(n), n % 2 == 0, "even({n})");
        assert_eq!(odd(n), n % 2 == 1, "odd({n})");
    }
}

#[test]
fn test_fields_are_not_memoized() {
    let counter = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&counter);

    let product = Builder::<&'static str, usize>::create()
        .with("tick", move |_| calls.fetch_add(1, Ordering::SeqCst) + 1)
        .build();

    let first = product.get(&"tick").unwrap();
    let second = product.get(&"tick").unwrap();
    assert_eq!((first, second), (1, 2));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[test]
fn test_build_does_not_invoke_handlers() {
    let counter = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&counter);

    let builder = Builder::<&'static str, usize>::create()
        .with("tick", move |_| calls.fetch_add(1, Ordering::SeqCst));
    let product = builder.build();
    let _ = format!("{product:?}");

    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_builds_are_independent() {
    let counter = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&counter);
    let builder = Builder::<&'static str, usize>::create()
        .with("tick", move |_| calls.fetch_add(1, Ordering::SeqCst));

    let a = builder.build();
    let b = builder.build();
    assert!(!Product::ptr_eq(&a, &b));
    assert!(Product::ptr_eq(&a, &a.clone()));

    // Same handler, so both see the shared counter; neither caches a value.
    assert_eq!(a.get(&"tick"), Some(0));
    assert_eq!(b.get(&"tick"), Some(1));
    assert_eq!(a.get(&"tick"), Some(2));
}

#[test]
fn test_handlers_receive_the_built_product() {
    let seen: Arc<Mutex<Vec<Product<&'static str, usize>>>> = Arc::default();
    let record = Arc::clone(&seen);

    let product = Builder::<&'static str, usize>::create()
        .with("first", move |p| {
            record.lock().unwrap().push(p.clone());
            p.get(&"second").unwrap()
        })
        .with("second", |_| 2)
        .build();

    assert_eq!(product.get(&"first"), Some(2));
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(Product::ptr_eq(&seen[0], &product));
}

#[test]
fn test_missing_field_reads_none() {
    let product = Builder::<&'static str, i64>::create()
        .with("a", |_| 1)
        .build();

    assert_eq!(product.get(&"b"), None);
    assert!(product.contains_key(&"a"));
    assert!(!product.contains_key(&"b"));
}

#[test]
fn test_handler_errors_are_returned_unchanged_and_retried() {
    let counter = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&counter);

    let product = Builder::<&'static str, Result<i64, String>>::create()
        .with("flaky", move |_| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("first read fails".to_string())
            } else {
                Ok(7)
            }
        })
        .build();

    assert_eq!(
        product.get(&"flaky"),
        Some(Err("first read fails".to_string()))
    );
    assert_eq!(product.get(&"flaky"), Some(Ok(7)));
}

#[test]
#[should_panic(expected = "handler blew up")]
fn test_handler_panics_propagate() {
    let product = Builder::<&'static str, i64>::create()
        .with("boom", |_| panic!("handler blew up"))
        .build();

    let _ = product.get(&"boom");
}

#[test]
fn test_product_keys_and_debug() {
    let product = Builder::<&'static str, i64>::create()
        .with("b", |_| 1)
        .with("a", |_| 2)
        .build();

    assert_eq!(product.keys().copied().collect::<Vec<_>>(), ["b", "a"]);
    assert_eq!(product.len(), 2);
    assert!(!product.is_empty());
    assert_eq!(format!("{product:?}"), r#"Product { keys: ["b", "a"] }"#);
}

#[test]
fn test_empty_product() {
    let product = Builder::<&'static str, i64>::create().build();
    assert!(product.is_empty());
    assert_eq!(product.get(&"anything"), None);
}
