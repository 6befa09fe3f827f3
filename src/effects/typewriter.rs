//! Typewriter Effect
//!
//! Reveals a string one character per tick at a fixed interval, then raises a
//! completion flag. Restartable: starting a new run replaces (and thereby
//! cancels) the previous one, so two writers never race on the displayed text.

use gloo_timers::callback::Interval;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The first `chars` characters of `text`, char-boundary safe.
pub fn prefix(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

/// Handle to a running typewriter. Dropping it clears the interval.
pub struct Typewriter {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl Typewriter {
    /// Begin typing `text` into `set_displayed`, one character every
    /// `speed_ms`, starting from the empty string. `set_complete` is raised
    /// once the full text is shown and the interval stops itself.
    pub fn start(
        text: String,
        speed_ms: u32,
        set_displayed: WriteSignal<String>,
        set_complete: WriteSignal<bool>,
    ) -> Self {
        set_displayed.set(String::new());
        set_complete.set(false);

        let total = text.chars().count();
        let position = Rc::new(Cell::new(0usize));
        let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let interval_for_tick = interval.clone();

        let tick = Interval::new(speed_ms, move || {
            let shown = position.get() + 1;
            position.set(shown);
            set_displayed.set(prefix(&text, shown));

            if shown >= total {
                set_complete.set(true);
                // Dropping the interval from its own callback clears it
                interval_for_tick.borrow_mut().take();
            }
        });

        *interval.borrow_mut() = Some(tick);

        Self { interval }
    }

    /// Stop typing without completing.
    pub fn cancel(&self) {
        self.interval.borrow_mut().take();
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_grows_to_full_text() {
        let text = "two pointers";
        let mut previous = String::new();
        for i in 0..=text.len() {
            let p = prefix(text, i);
            assert!(p.starts_with(&previous));
            previous = p;
        }
        assert_eq!(previous, text);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        assert_eq!(prefix("héllo", 2), "hé");
        assert_eq!(prefix("日本語", 1), "日");
    }

    #[test]
    fn test_prefix_clamps_past_end() {
        assert_eq!(prefix("abc", 10), "abc");
        assert_eq!(prefix("", 3), "");
    }
}
