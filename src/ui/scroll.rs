//! Window scroll plumbing shared by the navbar and the hero

use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::navbar::{AnchorScroller, NavError};

/// Smooth-scrolls document elements into view by id
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScroller;

impl AnchorScroller for DomScroller {
    #[cfg(feature = "hydrate")]
    fn scroll_to(&self, id: &str) -> Result<(), NavError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| NavError::AnchorNotFound(id.to_string()))?;

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    #[cfg(not(feature = "hydrate"))]
    fn scroll_to(&self, _id: &str) -> Result<(), NavError> {
        Ok(())
    }
}

/// Scroll to an anchor from a click handler. A missing target is logged and
/// otherwise ignored.
pub fn scroll_to_anchor(id: &str) {
    if let Err(err) = DomScroller.scroll_to(id) {
        warn!("Navigation skipped: {}", err);
    }
}

/// Current vertical scroll offset of the window, updated on every scroll event.
///
/// The listener is removed when the calling component is torn down.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let offset = RwSignal::new(0.0);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        let read_offset = || {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0)
        };

        offset.set(read_offset());

        let handle = window_event_listener(scroll, move |_| {
            offset.try_set(read_offset());
        });
        on_cleanup(move || handle.remove());
    }

    offset.read_only()
}
