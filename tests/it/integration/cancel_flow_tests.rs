//! Cancel-path gestures: end events with no intervening drop.

use crate::helpers::{
    drop_on, end_drag, event_log, init_tracing, start_drag, TestElement, TestTransfer,
};
use humandrag::{DragContext, DragSource, DropEffect, DropTarget, SourceConfig, TargetConfig};
use std::sync::Arc;

#[test]
fn test_end_without_drop_cancels_exactly_once() {
    init_tracing();
    let context = Arc::new(DragContext::new());
    let source_el = TestElement::new("source");
    let transfer = TestTransfer::new();
    let log = event_log();

    let _source = DragSource::attach(
        &context,
        source_el.handle(),
        SourceConfig::new()
            .data("x")
            .on_cancel({
                let log = log.clone();
                move |_| log.borrow_mut().push("cancel".to_string())
            })
            .on_drop({
                let log = log.clone();
                move |_| log.borrow_mut().push("drop".to_string())
            }),
    )
    .unwrap();

    start_drag(&source_el, &transfer);
    assert!(context.is_dragging());

    end_drag(&source_el);
    assert_eq!(*log.borrow(), vec!["cancel".to_string()]);
    assert!(!context.is_dragging());

    // The gesture is closed; a duplicate end event does nothing.
    end_drag(&source_el);
    assert_eq!(*log.borrow(), vec!["cancel".to_string()]);
}

#[test]
fn test_end_after_drop_does_not_cancel() {
    init_tracing();
    let context = Arc::new(DragContext::new());
    let source_el = TestElement::new("source");
    let target_el = TestElement::new("target");
    let transfer = TestTransfer::new();
    let log = event_log();

    let _source = DragSource::attach(
        &context,
        source_el.handle(),
        SourceConfig::new()
            .data("x")
            .on_cancel({
                let log = log.clone();
                move |_| log.borrow_mut().push("cancel".to_string())
            })
            .on_drop({
                let log = log.clone();
                move |_| log.borrow_mut().push("drop".to_string())
            }),
    )
    .unwrap();
    let _target =
        DropTarget::attach(&context, target_el.handle(), TargetConfig::new(DropEffect::Move))
            .unwrap();

    start_drag(&source_el, &transfer);
    drop_on(&target_el, &transfer);
    end_drag(&source_el);

    assert_eq!(*log.borrow(), vec!["drop".to_string()]);
    assert!(!context.is_dragging());
}

#[test]
fn test_stale_end_does_not_cancel_a_newer_gesture() {
    init_tracing();
    let context = Arc::new(DragContext::new());
    let first_el = TestElement::new("first");
    let second_el = TestElement::new("second");
    let transfer = TestTransfer::new();
    let log = event_log();

    let _first = DragSource::attach(
        &context,
        first_el.handle(),
        SourceConfig::new().data("a").on_cancel({
            let log = log.clone();
            move |_| log.borrow_mut().push("first cancel".to_string())
        }),
    )
    .unwrap();
    let _second = DragSource::attach(
        &context,
        second_el.handle(),
        SourceConfig::new().data("b").on_cancel({
            let log = log.clone();
            move |_| log.borrow_mut().push("second cancel".to_string())
        }),
    )
    .unwrap();

    // A second gesture starts before the first one's end event arrives.
    start_drag(&first_el, &transfer);
    start_drag(&second_el, &transfer);

    end_drag(&first_el);
    assert!(log.borrow().is_empty(), "stale end must not cancel");
    assert!(context.is_dragging());
    assert!(Arc::ptr_eq(
        &context.active_element().unwrap(),
        &second_el.handle()
    ));

    end_drag(&second_el);
    assert_eq!(*log.borrow(), vec!["second cancel".to_string()]);
    assert!(!context.is_dragging());
}

#[test]
fn test_second_gesture_replaces_the_first() {
    init_tracing();
    let context = Arc::new(DragContext::new());
    let first_el = TestElement::new("first");
    let second_el = TestElement::new("second");
    let transfer = TestTransfer::new();

    let _first =
        DragSource::attach(&context, first_el.handle(), SourceConfig::new().data("a")).unwrap();
    let _second =
        DragSource::attach(&context, second_el.handle(), SourceConfig::new().data("b")).unwrap();

    start_drag(&first_el, &transfer);
    start_drag(&second_el, &transfer);

    assert!(context.is_dragging());
    assert!(Arc::ptr_eq(
        &context.active_element().unwrap(),
        &second_el.handle()
    ));
}

#[test]
fn test_contexts_are_isolated_from_each_other() {
    init_tracing();
    let context_a = Arc::new(DragContext::new());
    let context_b = Arc::new(DragContext::new());
    let source_el = TestElement::new("source");
    let transfer = TestTransfer::new();

    let _source =
        DragSource::attach(&context_a, source_el.handle(), SourceConfig::new().data("x")).unwrap();

    start_drag(&source_el, &transfer);

    assert!(context_a.is_dragging());
    assert!(!context_b.is_dragging());
}
