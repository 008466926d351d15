//! Reveal hooks
//!
//! `use_reveal` wires a [`TrackedElement`] to a browser IntersectionObserver.
//! `use_entered` flips on the first frame after mount, for content that
//! animates in as soon as it exists (hero, overlay menu).

use leptos::html;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::core::reveal::{Rect, TrackedElement, Viewport};

/// Reveal flag for the element behind `target`.
///
/// Starts false and becomes true the first time the element meets the
/// viewport shrunk by `margin_px`. It never goes back to false. The element is
/// also measured once at mount, so content already on screen reveals without
/// waiting for a scroll. The observer is disconnected once revealed and when
/// the owning component is torn down.
pub fn use_reveal(target: NodeRef<html::Div>, margin_px: i32) -> ReadSignal<bool> {
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos::logging::warn;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

        let tracked = StoredValue::new(TrackedElement::new(margin_px));
        let slot = StoredValue::new_local(
            ObserverSlot::<web_sys::IntersectionObserver, ObserverCallback>::new(),
        );

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if revealed.get_untracked() {
                return;
            }

            let bounds = element.get_bounding_client_rect();
            let rect = Rect::new(bounds.top(), bounds.left(), bounds.bottom(), bounds.right());
            if tracked
                .try_update_value(|t| t.observe_rect(rect, current_viewport()))
                .unwrap_or(false)
            {
                revealed.set(true);
                return;
            }

            let on_entries: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<web_sys::IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    if tracked
                        .try_update_value(|t| t.observe(intersecting))
                        .unwrap_or(false)
                    {
                        revealed.set(true);
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_root_margin(&tracked.with_value(|t| t.root_margin()));

            match web_sys::IntersectionObserver::new_with_options(
                on_entries.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(created) => {
                    created.observe(&element);
                    slot.update_value(|s| s.replace(created, on_entries));
                }
                Err(err) => {
                    // Without an observer the content would never show
                    warn!("IntersectionObserver unavailable: {:?}", err);
                    revealed.set(true);
                }
            }
        });

        on_cleanup(move || {
            slot.try_update_value(ObserverSlot::clear);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, margin_px);
    }

    revealed.read_only()
}

/// True from the first animation frame after mount
pub fn use_entered() -> ReadSignal<bool> {
    let entered = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    request_animation_frame(move || {
        entered.try_set(true);
    });

    entered.read_only()
}

/// Stops an observer from calling back
#[cfg(any(feature = "hydrate", test))]
trait Disconnect {
    fn disconnect(&self);
}

#[cfg(feature = "hydrate")]
impl Disconnect for web_sys::IntersectionObserver {
    fn disconnect(&self) {
        web_sys::IntersectionObserver::disconnect(self);
    }
}

/// The live observer and the callback it calls into.
///
/// The observer is always disconnected before its callback is dropped, both
/// when it is replaced and when the slot is cleared.
#[cfg(any(feature = "hydrate", test))]
struct ObserverSlot<O: Disconnect, C> {
    active: Option<(O, C)>,
}

#[cfg(any(feature = "hydrate", test))]
impl<O: Disconnect, C> ObserverSlot<O, C> {
    fn new() -> Self {
        Self { active: None }
    }

    fn replace(&mut self, observer: O, callback: C) {
        self.clear();
        self.active = Some((observer, callback));
    }

    fn clear(&mut self) {
        if let Some((observer, callback)) = self.active.take() {
            observer.disconnect();
            drop(callback);
        }
    }
}

#[cfg(feature = "hydrate")]
fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakeObserver(&'static str, Log);

    impl Disconnect for FakeObserver {
        fn disconnect(&self) {
            self.1.borrow_mut().push(format!("disconnect {}", self.0));
        }
    }

    struct FakeCallback(&'static str, Log);

    impl Drop for FakeCallback {
        fn drop(&mut self) {
            self.1.borrow_mut().push(format!("drop {}", self.0));
        }
    }

    #[test]
    fn test_replacing_disconnects_previous_observer_first() {
        let log = Log::default();
        let mut slot = ObserverSlot::new();

        slot.replace(FakeObserver("a", log.clone()), FakeCallback("a", log.clone()));
        assert!(log.borrow().is_empty());

        slot.replace(FakeObserver("b", log.clone()), FakeCallback("b", log.clone()));
        assert_eq!(*log.borrow(), ["disconnect a", "drop a"]);

        slot.clear();
        assert_eq!(*log.borrow(), ["disconnect a", "drop a", "disconnect b", "drop b"]);
    }

    #[test]
    fn test_clearing_empty_slot_is_noop() {
        let log = Log::default();
        let mut slot = ObserverSlot::<FakeObserver, FakeCallback>::new();
        slot.clear();
        slot.clear();
        assert!(log.borrow().is_empty());
    }
}
