//! Animated Count-Up
//!
//! A cancellable `requestAnimationFrame` task that drives a displayed integer
//! from 0 to a target with a cubic ease-out curve. The curve math is separate
//! from the scheduling so it can be tested natively.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Cubic ease-out: fast start, settling into the target.
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Displayed value at `elapsed_ms` into a count-up of `duration_ms`.
pub fn count_at(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    let p = if duration_ms > 0.0 {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (f64::from(target) * ease_out_cubic(p)).floor() as u32
}

/// Handle to an in-flight count-up animation. Dropping it cancels the
/// pending animation frame so a torn-down view is never written to.
pub struct CountUp {
    raf_id: Rc<Cell<Option<i32>>>,
}

impl CountUp {
    /// Start animating `set_count` from 0 to `target` over `duration_ms`,
    /// driven by frame timestamps.
    pub fn start(target: u32, duration_ms: f64, set_count: WriteSignal<u32>) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let start_time: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

        // The frame closure re-schedules itself through this shared slot.
        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let slot_for_frame = slot.clone();
        let raf_for_frame = raf_id.clone();

        *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            let start = match start_time.get() {
                Some(start) => start,
                None => {
                    start_time.set(Some(timestamp));
                    timestamp
                }
            };

            let elapsed = timestamp - start;
            set_count.set(count_at(target, elapsed, duration_ms));

            if elapsed < duration_ms {
                let next = slot_for_frame
                    .borrow()
                    .as_ref()
                    .and_then(request_frame);
                raf_for_frame.set(next);
            } else {
                raf_for_frame.set(None);
            }
        }));

        raf_id.set(slot.borrow().as_ref().and_then(request_frame));

        Self { raf_id }
    }

    /// Cancel the pending frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for CountUp {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_count_is_monotone_and_bounded() {
        let mut previous = 0;
        for step in 0..=200 {
            let elapsed = f64::from(step) * 10.0;
            let shown = count_at(94, elapsed, 2000.0);
            assert!(shown >= previous, "must never decrease");
            assert!(shown <= 94, "must never overshoot the target");
            previous = shown;
        }
    }

    #[test]
    fn test_count_reaches_target_exactly() {
        assert_eq!(count_at(94, 2000.0, 2000.0), 94);
        // Clamped past the end too
        assert_eq!(count_at(94, 5000.0, 2000.0), 94);
    }

    #[test]
    fn test_count_stays_below_target_before_end() {
        // floor() keeps every pre-terminal sample strictly under the target
        assert!(count_at(94, 1999.0, 2000.0) <= 94);
        assert_eq!(count_at(94, 0.0, 2000.0), 0);
    }

    #[test]
    fn test_zero_duration_snaps_to_target() {
        assert_eq!(count_at(50, 0.0, 0.0), 50);
    }
}
