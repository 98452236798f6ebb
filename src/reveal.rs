//! Scroll-triggered reveal.
//!
//! A section asks [`use_reveal`] for a node ref and a flag. The flag starts
//! `false` and becomes `true` the first time enough of the node is in the
//! viewport, after which the observer is released. It never goes back.

use leptos::html;
use leptos::prelude::*;

pub const DEFAULT_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    eager: bool,
}

impl RevealOptions {
    /// Fraction of the element that must be visible, clamped to `[0, 1]`.
    pub fn threshold(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            eager: false,
        }
    }

    /// Reveal as soon as the node mounts instead of waiting for the viewport.
    ///
    /// Used for content that appears in response to a click, such as a tab
    /// panel, where the user is already looking at it.
    pub fn eager(self) -> Self {
        Self {
            eager: true,
            ..self
        }
    }

    pub fn value(&self) -> f64 {
        self.threshold
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::threshold(DEFAULT_THRESHOLD)
    }
}

/// One intersection report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub ratio: f64,
    pub intersecting: bool,
}

impl Observation {
    pub fn visible(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    pub fn hidden() -> Self {
        Self {
            ratio: 0.0,
            intersecting: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    Pending,
    Revealed,
    /// Detached before it was ever revealed.
    Cancelled,
}

/// One-shot latch: `Pending -> Revealed` on the first qualifying observation.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    threshold: f64,
    state: LatchState,
}

impl RevealLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            threshold: options.value(),
            state: LatchState::Pending,
        }
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == LatchState::Revealed
    }

    /// Feed an observation. Returns `true` only on the call that reveals.
    pub fn observe(&mut self, observation: Observation) -> bool {
        if self.state != LatchState::Pending {
            return false;
        }
        if observation.intersecting && observation.ratio >= self.threshold {
            self.state = LatchState::Revealed;
            return true;
        }
        false
    }

    /// Reveal without an observation, used when the viewport cannot be observed.
    pub fn force_reveal(&mut self) -> bool {
        if self.state == LatchState::Pending {
            self.state = LatchState::Revealed;
            return true;
        }
        false
    }

    /// Stop listening. A revealed latch stays revealed.
    pub fn cancel(&mut self) {
        if self.state == LatchState::Pending {
            self.state = LatchState::Cancelled;
        }
    }
}

/// A latch owned by a component, shared between the observer callback, the
/// fallback path and cleanup.
///
/// Once the owner is disposed every operation is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct SharedLatch(StoredValue<RevealLatch>);

impl SharedLatch {
    pub fn new(options: RevealOptions) -> Self {
        Self(StoredValue::new(RevealLatch::new(options)))
    }

    pub fn state(self) -> Option<LatchState> {
        self.0.try_with_value(RevealLatch::state)
    }

    pub fn observe(self, observation: Observation) -> bool {
        self.0
            .try_update_value(|latch| latch.observe(observation))
            .unwrap_or(false)
    }

    pub fn force_reveal(self) -> bool {
        self.0
            .try_update_value(RevealLatch::force_reveal)
            .unwrap_or(false)
    }

    pub fn cancel(self) {
        self.0.try_update_value(RevealLatch::cancel);
    }
}

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::prelude::*;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::{Observation, RevealOptions, SharedLatch};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// A live `IntersectionObserver`; dropping it disconnects.
    pub(super) struct Subscription {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl Subscription {
        pub(super) fn attach(
            target: &Element,
            options: RevealOptions,
            latch: SharedLatch,
            set_revealed: WriteSignal<bool>,
        ) -> Result<Self, JsValue> {
            let callback = Callback::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let observation = Observation {
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        };
                        if latch.observe(observation) {
                            observer.disconnect();
                            set_revealed.set(true);
                            break;
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.value()));
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(target);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for Subscription {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Observe a `div` and report whether it has been revealed.
pub fn use_reveal(options: RevealOptions) -> (NodeRef<html::Div>, Signal<bool>) {
    let node = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let latch = SharedLatch::new(options);

    #[cfg(feature = "hydrate")]
    {
        let subscription = StoredValue::new_local(None::<observer::Subscription>);

        Effect::new(move |_| {
            let Some(element) = node.get() else {
                return;
            };
            if latch.state() != Some(LatchState::Pending)
                || subscription.with_value(Option::is_some)
            {
                return;
            }
            if options.is_eager() {
                if latch.force_reveal() {
                    set_revealed.set(true);
                }
                return;
            }
            match observer::Subscription::attach(&element, options, latch, set_revealed) {
                Ok(active) => subscription.set_value(Some(active)),
                Err(err) => {
                    tracing::warn!(?err, "viewport observation unavailable, revealing section");
                    if latch.force_reveal() {
                        set_revealed.set(true);
                    }
                }
            }
        });

        // Dropping the subscription disconnects the observer.
        on_cleanup(move || {
            latch.cancel();
            subscription.try_update_value(|active| {
                active.take();
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (set_revealed, latch);

    (node, revealed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealOptions::threshold(1.5).value(), 1.0);
        assert_eq!(RevealOptions::threshold(-0.3).value(), 0.0);
        assert_eq!(RevealOptions::threshold(f64::NAN).value(), DEFAULT_THRESHOLD);
        assert_eq!(RevealOptions::default().value(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn stays_pending_below_threshold() {
        let mut latch = RevealLatch::new(RevealOptions::threshold(0.3));
        assert!(!latch.observe(Observation::visible(0.1)));
        assert!(!latch.observe(Observation::hidden()));
        assert_eq!(latch.state(), LatchState::Pending);
    }

    #[test]
    fn reveals_exactly_once() {
        let mut latch = RevealLatch::new(RevealOptions::threshold(0.2));
        assert!(latch.observe(Observation::visible(0.25)));

        let mut flips = 0;
        for _ in 0..5 {
            flips += latch.observe(Observation::hidden()) as u32;
            flips += latch.observe(Observation::visible(0.9)) as u32;
        }
        assert_eq!(flips, 0);
        assert!(latch.is_revealed());
    }

    #[test]
    fn ratio_without_intersection_does_not_count() {
        let mut latch = RevealLatch::new(RevealOptions::threshold(0.0));
        let edge = Observation {
            ratio: 0.0,
            intersecting: false,
        };
        assert!(!latch.observe(edge));
        let touching = Observation {
            ratio: 0.0,
            intersecting: true,
        };
        assert!(latch.observe(touching));
    }

    #[test]
    fn cancelled_latch_ignores_later_observations() {
        let mut latch = RevealLatch::new(RevealOptions::default());
        latch.cancel();
        assert!(!latch.observe(Observation::visible(1.0)));
        assert!(!latch.force_reveal());
        assert_eq!(latch.state(), LatchState::Cancelled);
    }

    #[test]
    fn cancel_after_reveal_keeps_it_revealed() {
        let mut latch = RevealLatch::new(RevealOptions::default());
        assert!(latch.observe(Observation::visible(0.5)));
        latch.cancel();
        assert!(latch.is_revealed());
    }

    #[test]
    fn force_reveal_is_a_fallback_for_pending_latches() {
        let mut latch = RevealLatch::new(RevealOptions::default());
        assert!(latch.force_reveal());
        assert!(!latch.force_reveal());
        assert!(latch.is_revealed());
    }

    #[test]
    fn eager_keeps_the_threshold() {
        let options = RevealOptions::threshold(0.3).eager();
        assert!(options.is_eager());
        assert_eq!(options.value(), 0.3);
        assert!(!RevealOptions::default().is_eager());
    }

    #[test]
    fn shared_latch_is_cancelled_by_cleanup() {
        let owner = Owner::new();
        let latch = owner.with(|| {
            let latch = SharedLatch::new(RevealOptions::default());
            on_cleanup(move || latch.cancel());
            latch
        });
        assert_eq!(latch.state(), Some(LatchState::Pending));

        owner.cleanup();
        assert!(!latch.observe(Observation::visible(1.0)));
        assert!(!latch.force_reveal());
    }

    #[test]
    fn shared_latch_fallback_reveals_once() {
        let owner = Owner::new();
        owner.with(|| {
            let latch = SharedLatch::new(RevealOptions::default());
            assert!(latch.force_reveal());
            assert!(!latch.force_reveal());
            assert!(!latch.observe(Observation::visible(1.0)));
            latch.cancel();
            assert_eq!(latch.state(), Some(LatchState::Revealed));
        });
    }

    #[test]
    fn shared_latch_cancel_before_reveal_ignores_late_callbacks() {
        let owner = Owner::new();
        owner.with(|| {
            let latch = SharedLatch::new(RevealOptions::default());
            latch.cancel();
            assert!(!latch.observe(Observation::visible(0.9)));
            assert_eq!(latch.state(), Some(LatchState::Cancelled));
        });
    }
}
