//! Leptos DragScroll Utilities
//!
//! Horizontal drag-to-scroll for Leptos using mouse and touch events.
//! Moves the container's `scrollLeft` by twice the pointer distance.

mod tracker;

pub use tracker::{DragPhase, DragScroll, SCROLL_SENSITIVITY};

use leptos::html::Div;
use leptos::prelude::*;

/// Drag-scroll state signals bound to one scroll container
#[derive(Clone, Copy)]
pub struct DragScrollSignals {
    pub tracker_read: ReadSignal<DragScroll>,
    pub tracker_write: WriteSignal<DragScroll>,
    /// The horizontally scrolling element
    pub container: NodeRef<Div>,
}

impl DragScrollSignals {
    /// Reactive; use for cursor styling
    pub fn is_dragging(&self) -> bool {
        self.tracker_read.get().is_dragging()
    }
}

pub fn create_drag_scroll_signals(container: NodeRef<Div>) -> DragScrollSignals {
    let (tracker_read, tracker_write) = signal(DragScroll::new());
    DragScrollSignals {
        tracker_read,
        tracker_write,
        container,
    }
}

/// Pointer x relative to the container's left edge
fn relative_x(el: &web_sys::HtmlElement, page_x: i32) -> i32 {
    page_x - el.offset_left()
}

fn start_drag(ds: &DragScrollSignals, page_x: i32) {
    let Some(el) = ds.container.get_untracked() else { return };
    let x = relative_x(&el, page_x);
    let scroll_left = el.scroll_left();
    ds.tracker_write.update(|t| t.press(x, scroll_left));
}

/// Apply a move; returns false when not dragging
fn drag_to(ds: &DragScrollSignals, page_x: i32) -> bool {
    let Some(el) = ds.container.get_untracked() else { return false };
    let x = relative_x(&el, page_x);
    match ds.tracker_read.get_untracked().drag_to(x) {
        Some(offset) => {
            el.set_scroll_left(offset);
            true
        }
        None => false,
    }
}

/// End drag operation (mouseup, mouseleave, touchend)
pub fn end_drag(ds: &DragScrollSignals) {
    if ds.tracker_read.get_untracked().is_dragging() {
        ds.tracker_write.update(|t| t.release());
    }
}

/// Create mousedown handler for the container
pub fn make_on_mousedown(ds: DragScrollSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        start_drag(&ds, ev.page_x());
    }
}

/// Create mousemove handler for the container
pub fn make_on_mousemove(ds: DragScrollSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if !ds.tracker_read.get_untracked().is_dragging() {
            return;
        }
        // Keep the browser from starting a text selection
        ev.prevent_default();
        drag_to(&ds, ev.page_x());
    }
}

/// Create touchstart handler for the container
pub fn make_on_touchstart(ds: DragScrollSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            start_drag(&ds, touch.page_x());
        }
    }
}

/// Create touchmove handler for the container
pub fn make_on_touchmove(ds: DragScrollSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            drag_to(&ds, touch.page_x());
        }
    }
}

/// Smoothly scroll the container by `delta` pixels (negative = left)
pub fn scroll_by_step(container: NodeRef<Div>, delta: f64) {
    let Some(el) = container.get_untracked() else { return };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(delta);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_by_with_scroll_to_options(&opts);
}
