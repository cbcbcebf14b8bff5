use super::*;
use std::rc::Rc;

#[test]
fn literal_resolves_without_source() {
    let binding: Binding<String> = "hello".into();
    assert_eq!(binding.resolve(), "hello");
    assert!(binding.source().is_none());
    assert!(!binding.is_bound());
}

#[test]
fn bound_reads_current_value_at_resolve_time() {
    let count = Observable::new(1);
    let binding: Binding<String> = (&count).into();
    assert_eq!(binding.resolve(), "1");

    count.set(42).unwrap();

    assert_eq!(binding.resolve(), "42");
    assert!(binding.is_bound());
}

#[test]
fn bound_source_watches_the_same_cell() {
    let count = Observable::new(0);
    let binding = Binding::bound(&count, |value| format!("Count: {value}"));
    let source = binding.source().expect("bound binding has a source");
    let id = source.watch(Rc::new(|| Ok(())));
    assert_eq!(count.listener_count(), 1);
    source.unwatch(id);
    assert_eq!(count.listener_count(), 0);
    assert_eq!(binding.resolve(), "Count: 0");
}
