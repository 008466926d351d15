//! Viewport reveal tracking
//!
//! Every animated section starts hidden and is revealed the first time its
//! bounding box meets the viewport. Once revealed it stays revealed, even if it
//! later scrolls out of view again.

/// Default inset applied to the viewport before testing intersection.
///
/// Negative values shrink the viewport, so an element only counts as visible
/// once it is this many pixels inside the screen edge.
pub const DEFAULT_REVEAL_MARGIN_PX: i32 = -100;

/// One-shot reveal state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Latch that moves from `NotRevealed` to `Revealed` at most once
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an intersection observation.
    ///
    /// Returns true only on the observation that flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.state == RevealState::NotRevealed {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }
}

/// Element bounding box in viewport coordinates (CSS pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Box of the given size with its top-left corner at (`left`, `top`)
    pub fn from_origin(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self::new(top, left, top + height, left + width)
    }

    /// Overlap with positive area. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Size of the visible viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport rectangle grown by `margin_px` on each side
    pub fn inset(&self, margin_px: i32) -> Rect {
        let m = margin_px as f64;
        Rect::new(-m, -m, self.height + m, self.width + m)
    }
}

/// A rendered region whose reveal state is tracked
#[derive(Clone, Copy, Debug)]
pub struct TrackedElement {
    latch: RevealLatch,
    margin_px: i32,
}

impl TrackedElement {
    pub fn new(margin_px: i32) -> Self {
        Self {
            latch: RevealLatch::new(),
            margin_px,
        }
    }

    pub fn margin_px(&self) -> i32 {
        self.margin_px
    }

    /// `rootMargin` value for an IntersectionObserver
    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin_px)
    }

    /// Re-derive intersection from the element's current bounding box.
    ///
    /// Used at mount (before any scroll event) and whenever the browser reports
    /// a geometry change. Returns true if this call revealed the element.
    pub fn observe_rect(&mut self, rect: Rect, viewport: Viewport) -> bool {
        let area = viewport.inset(self.margin_px);
        self.latch.observe(rect.overlaps(&area))
    }

    /// Feed an intersection flag computed by the browser
    pub fn observe(&mut self, intersecting: bool) -> bool {
        self.latch.observe(intersecting)
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }
}

impl Default for TrackedElement {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_MARGIN_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn test_latch_starts_not_revealed() {
        let latch = RevealLatch::new();
        assert_eq!(latch.state(), RevealState::NotRevealed);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::new();
        latch.observe(true);
        for intersecting in [false, true, false, false] {
            latch.observe(intersecting);
            assert_eq!(latch.state(), RevealState::Revealed);
        }
    }

    #[test]
    fn test_element_in_view_at_mount_is_revealed_without_scroll() {
        let mut element = TrackedElement::default();
        let changed = element.observe_rect(Rect::from_origin(200.0, 0.0, 1280.0, 400.0), SCREEN);
        assert!(changed);
        assert!(element.is_revealed());
    }

    #[test]
    fn test_element_below_fold_stays_hidden() {
        let mut element = TrackedElement::default();
        element.observe_rect(Rect::from_origin(1200.0, 0.0, 1280.0, 400.0), SCREEN);
        assert!(!element.is_revealed());
    }

    #[test]
    fn test_negative_margin_delays_reveal() {
        // Top edge 50px above the bottom of the screen
        let peeking = Rect::from_origin(750.0, 0.0, 1280.0, 400.0);

        let mut inset = TrackedElement::new(-100);
        inset.observe_rect(peeking, SCREEN);
        assert!(!inset.is_revealed());

        let mut flush = TrackedElement::new(0);
        flush.observe_rect(peeking, SCREEN);
        assert!(flush.is_revealed());
    }

    #[test]
    fn test_scrolling_past_keeps_revealed() {
        let mut element = TrackedElement::default();
        element.observe_rect(Rect::from_origin(300.0, 0.0, 1280.0, 200.0), SCREEN);
        assert!(element.is_revealed());

        // Scrolled far above the viewport
        let changed = element.observe_rect(Rect::from_origin(-3000.0, 0.0, 1280.0, 200.0), SCREEN);
        assert!(!changed);
        assert!(element.is_revealed());
    }

    #[test]
    fn test_touching_edge_does_not_reveal() {
        let mut element = TrackedElement::new(0);
        element.observe_rect(Rect::from_origin(800.0, 0.0, 1280.0, 200.0), SCREEN);
        assert!(!element.is_revealed());
    }

    #[test]
    fn test_root_margin_format() {
        assert_eq!(TrackedElement::default().root_margin(), "-100px");
        assert_eq!(TrackedElement::new(20).root_margin(), "20px");
    }

    #[test]
    fn test_viewport_inset() {
        let area = SCREEN.inset(-100);
        assert_eq!(area, Rect::new(100.0, 100.0, 700.0, 1180.0));
    }
}
