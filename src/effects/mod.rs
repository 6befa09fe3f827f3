//! Timer-Driven Effects & DOM Side Effects
//!
//! Cancellable scheduled tasks (count-up, typewriter) plus the two small DOM
//! side effects the app performs: locking body scroll under overlays and the
//! fire-and-forget clipboard write.

pub mod counter;
pub mod typewriter;

pub use counter::CountUp;
pub use typewriter::Typewriter;

/// Toggle the document-level scroll lock. Last writer wins; callers restore
/// on close and on teardown.
pub fn set_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());

    if let Some(body) = body {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// Write text to the clipboard, swallowing failure. Callers show their
/// "copied" confirmation optimistically regardless.
pub fn copy_text(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

/// Smooth-scroll the element with the given id into view, if present.
pub fn scroll_to_id(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
