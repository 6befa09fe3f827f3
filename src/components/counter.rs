//! Stat Counter Component
//!
//! A hero statistic that counts up from 0 once it first scrolls into view.
//! Only the first intersection starts the animation; later visibility changes
//! are ignored. The pending animation frame is cancelled and the observer
//! disconnected on teardown.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::effects::CountUp;

/// Animated statistic with a label underneath
#[component]
pub fn StatCounter(
    /// Final value the counter settles on
    target: u32,
    #[prop(default = 2000.0)]
    duration_ms: f64,
    /// Rendered immediately after the number ("+", "%", "K+", ...)
    #[prop(default = "")]
    suffix: &'static str,
    label: &'static str,
    /// Render the value divided by ten with one decimal (49 -> "4.9")
    #[prop(default = false)]
    tenths: bool,
) -> impl IntoView {
    let (count, set_count) = create_signal(0u32);
    let node_ref = create_node_ref::<html::Div>();

    let observed = Rc::new(Cell::new(false));
    let started = Rc::new(Cell::new(false));
    let animation: Rc<RefCell<Option<CountUp>>> = Rc::new(RefCell::new(None));
    let animation_for_cleanup = animation.clone();
    let observer_handle: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
        Rc::new(RefCell::new(None));
    let observer_for_cleanup = observer_handle.clone();

    create_effect(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if observed.get() {
            return;
        }
        observed.set(true);

        let started = started.clone();
        let animation = animation.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });

                // Only the first visibility trigger counts
                if visible && !started.get() {
                    started.set(true);
                    *animation.borrow_mut() =
                        Some(CountUp::start(target, duration_ms, set_count));
                    observer.disconnect();
                }
            },
        );

        if let Ok(observer) =
            web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        {
            observer.observe(&el);
            *observer_handle.borrow_mut() = Some(observer);
            callback.forget();
        }
    });

    // Stop observing on teardown too; the counter may unmount before it
    // ever scrolls into view
    on_cleanup(move || {
        if let Some(observer) = observer_for_cleanup.borrow_mut().take() {
            observer.disconnect();
        }
        animation_for_cleanup.borrow_mut().take();
    });

    let shown = move || {
        let c = count.get();
        if tenths {
            format!("{}.{}", c / 10, c % 10)
        } else {
            c.to_string()
        }
    };

    view! {
        <div class="text-center lg:text-left" node_ref=node_ref>
            <div class="text-2xl sm:text-3xl font-bold text-white">
                {shown}
                {suffix}
            </div>
            <div class="text-xs sm:text-sm text-gray-500 mt-1">{label}</div>
        </div>
    }
}
