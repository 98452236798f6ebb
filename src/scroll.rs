//! Window scroll tracking: the navbar's compaction flag and hero parallax.

use leptos::prelude::*;

/// Offset in pixels past which the navbar compacts.
pub const COMPACT_OFFSET: f64 = 20.0;

/// How far a parallax layer moves per pixel scrolled.
pub const PARALLAX_RATE: f64 = 0.2;

/// Inline style shifting a background layer for the given scroll offset.
///
/// Negative offsets (overscroll bounce) are treated as zero.
pub fn parallax_style(offset: f64) -> String {
    format!("transform: translateY({:.1}px)", offset.max(0.0) * PARALLAX_RATE)
}

/// Continuously re-evaluated "scrolled past threshold" flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
    attached: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            attached: true,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns the new flag when it changes.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        if !self.attached {
            return None;
        }
        let scrolled = offset > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(COMPACT_OFFSET)
    }
}

#[cfg(feature = "hydrate")]
fn window_offset() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

/// Calls `on_offset` now and on every window scroll until the owner is cleaned up.
#[cfg(feature = "hydrate")]
fn follow_window_scroll(on_offset: impl Fn(f64) + 'static) {
    let sync = move || {
        if let Some(offset) = window_offset() {
            on_offset(offset);
        }
    };

    sync();
    let listener = StoredValue::new_local(Some(window_event_listener(
        leptos::ev::scroll,
        move |_| sync(),
    )));

    on_cleanup(move || {
        if let Some(handle) = listener.try_update_value(Option::take).flatten() {
            handle.remove();
        }
    });
}

/// Whether the window is scrolled past `threshold`, kept in sync with scroll events.
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let tracker = StoredValue::new(ScrollTracker::new(threshold));
        follow_window_scroll(move |offset| {
            if let Some(flag) = tracker.try_update_value(|t| t.on_scroll(offset)).flatten() {
                set_scrolled.set(flag);
            }
        });
        on_cleanup(move || {
            tracker.try_update_value(ScrollTracker::detach);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (threshold, set_scrolled);

    scrolled.into()
}

/// The window's vertical scroll offset in pixels, `0.0` until hydrated.
pub fn use_scroll_offset() -> Signal<f64> {
    let (offset, set_offset) = signal(0.0);

    #[cfg(feature = "hydrate")]
    follow_window_scroll(move |current| set_offset.set(current));

    #[cfg(not(feature = "hydrate"))]
    let _ = set_offset;

    offset.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_offset_in_both_directions() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.on_scroll(5.0), None);
        assert_eq!(tracker.on_scroll(21.0), Some(true));
        assert_eq!(tracker.on_scroll(400.0), None);
        assert_eq!(tracker.on_scroll(3.0), Some(false));
        assert_eq!(tracker.on_scroll(64.0), Some(true));
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        let mut tracker = ScrollTracker::new(20.0);
        assert_eq!(tracker.on_scroll(20.0), None);
        assert!(!tracker.is_scrolled());
        assert_eq!(tracker.on_scroll(20.5), Some(true));
    }

    #[test]
    fn repeated_crossings_track_current_offset() {
        let mut tracker = ScrollTracker::default();
        for offset in [0.0, 50.0, 10.0, 90.0, 0.0, 30.0] {
            tracker.on_scroll(offset);
            assert_eq!(tracker.is_scrolled(), offset > COMPACT_OFFSET);
        }
    }

    #[test]
    fn detached_tracker_reports_nothing() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scroll(100.0);
        tracker.detach();
        assert_eq!(tracker.on_scroll(0.0), None);
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn parallax_moves_a_fifth_of_the_scroll() {
        assert_eq!(parallax_style(0.0), "transform: translateY(0.0px)");
        assert_eq!(parallax_style(100.0), "transform: translateY(20.0px)");
        assert_eq!(parallax_style(37.0), "transform: translateY(7.4px)");
    }

    #[test]
    fn overscroll_does_not_move_the_layer() {
        assert_eq!(parallax_style(-60.0), parallax_style(0.0));
    }

    #[test]
    fn offset_is_zero_before_hydration() {
        let owner = Owner::new();
        owner.with(|| assert_eq!(use_scroll_offset().get_untracked(), 0.0));
    }
}
