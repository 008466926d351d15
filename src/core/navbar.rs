//! Navbar scroll state and the mobile overlay menu
//!
//! The navbar has two presentations that are always rendered: an inline top
//! bar shown at the top of the page, and a floating pill that slides in once
//! the page has scrolled past [`SCROLL_THRESHOLD_PX`]. The overlay menu has its
//! own open/closed state and only changes on explicit user action.

/// Scroll offset past which the floating navbar takes over
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Presentation fade/slide duration in seconds
pub const PRESENTATION_TRANSITION_SECONDS: f64 = 0.3;

/// Vertical offset of the floating navbar while hidden
const FLOATING_HIDDEN_OFFSET_PX: f64 = -100.0;

/// In-page navigation target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Anchor {
    /// Navigation order
    pub const ALL: [Anchor; 5] = [
        Anchor::About,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Skills,
        Anchor::Contact,
    ];

    /// Element id of the target section
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::About => "About",
            Anchor::Experience => "Experience",
            Anchor::Projects => "Projects",
            Anchor::Skills => "Skills",
            Anchor::Contact => "Contact",
        }
    }
}

/// Navbar presentation state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavbarState {
    /// Near the top of the page: inline bar
    #[default]
    Collapsed,
    /// Scrolled down: floating pill
    Expanded,
}

impl NavbarState {
    pub fn from_scroll(offset_px: f64) -> Self {
        if offset_px > SCROLL_THRESHOLD_PX {
            NavbarState::Expanded
        } else {
            NavbarState::Collapsed
        }
    }
}

/// The two navbar renderings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Transparent bar at the top of the hero
    Inline,
    /// Blurred pill pinned to the top once scrolled
    Floating,
}

/// Visual state of one presentation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationStyle {
    pub opacity: f64,
    pub offset_y: f64,
    pub interactive: bool,
}

impl PresentationStyle {
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); pointer-events: {}; transition: opacity {}s ease-in-out, transform {}s ease-in-out;",
            self.opacity,
            self.offset_y,
            if self.interactive { "auto" } else { "none" },
            PRESENTATION_TRANSITION_SECONDS,
            PRESENTATION_TRANSITION_SECONDS,
        )
    }
}

/// Style of `presentation` while the navbar is in `state`.
///
/// Exactly one presentation is visible and interactive at any time.
pub fn presentation_style(state: NavbarState, presentation: Presentation) -> PresentationStyle {
    let active = matches!(
        (state, presentation),
        (NavbarState::Collapsed, Presentation::Inline)
            | (NavbarState::Expanded, Presentation::Floating)
    );
    let offset_y = match presentation {
        Presentation::Floating if !active => FLOATING_HIDDEN_OFFSET_PX,
        _ => 0.0,
    };

    PresentationStyle {
        opacity: if active { 1.0 } else { 0.0 },
        offset_y,
        interactive: active,
    }
}

/// Overlay menu state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MobileMenuState {
    #[default]
    Closed,
    Open,
}

/// Why the overlay menu is being closed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// The close control inside the menu
    Button,
    /// Click on the dimmed backdrop
    Backdrop,
    /// A navigation link inside the menu
    Link(Anchor),
}

/// Overlay menu toggled only by explicit user action
#[derive(Clone, Copy, Debug, Default)]
pub struct MobileMenu {
    state: MobileMenuState,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MobileMenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MobileMenuState::Open
    }

    /// Open the menu. Opening an open menu changes nothing.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = MobileMenuState::Open;
        true
    }

    /// Close the menu. Closing a closed menu changes nothing.
    ///
    /// Returns the anchor to scroll to when the close came from a link.
    pub fn close(&mut self, reason: CloseReason) -> Option<Anchor> {
        if !self.is_open() {
            return None;
        }
        self.state = MobileMenuState::Closed;
        match reason {
            CloseReason::Link(anchor) => Some(anchor),
            CloseReason::Button | CloseReason::Backdrop => None,
        }
    }

    /// Burger button
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close(CloseReason::Button);
        } else {
            self.open();
        }
    }
}

/// Navigation failures. None of them are fatal to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavError {
    /// No element with the anchor id exists in the document
    AnchorNotFound(String),
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavError::AnchorNotFound(id) => write!(f, "No element with id '{}'", id),
        }
    }
}

impl std::error::Error for NavError {}

/// Something that can bring an in-page anchor into view
pub trait AnchorScroller {
    fn scroll_to(&self, id: &str) -> Result<(), NavError>;
}

/// Component-local navbar state
#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarController {
    state: NavbarState,
    last_offset_px: f64,
    menu: MobileMenu,
}

impl NavbarController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the navbar state from the latest scroll offset.
    ///
    /// Returns true if the state changed.
    pub fn on_scroll(&mut self, offset_px: f64) -> bool {
        self.last_offset_px = offset_px;
        let next = NavbarState::from_scroll(offset_px);
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    pub fn state(&self) -> NavbarState {
        self.state
    }

    pub fn last_offset_px(&self) -> f64 {
        self.last_offset_px
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    pub fn style(&self, presentation: Presentation) -> PresentationStyle {
        presentation_style(self.state, presentation)
    }

    /// A navigation link was activated.
    ///
    /// Closes the overlay menu if it is open and scrolls to the anchor. A
    /// missing target is reported back and leaves the menu closed.
    pub fn follow_link(
        &mut self,
        anchor: Anchor,
        scroller: &impl AnchorScroller,
    ) -> Result<(), NavError> {
        self.menu.close(CloseReason::Link(anchor));
        scroller.scroll_to(anchor.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScroller {
        calls: RefCell<Vec<String>>,
        missing: Vec<&'static str>,
    }

    impl AnchorScroller for RecordingScroller {
        fn scroll_to(&self, id: &str) -> Result<(), NavError> {
            self.calls.borrow_mut().push(id.to_string());
            if self.missing.contains(&id) {
                return Err(NavError::AnchorNotFound(id.to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(NavbarState::from_scroll(99.0), NavbarState::Collapsed);
        assert_eq!(NavbarState::from_scroll(100.0), NavbarState::Collapsed);
        assert_eq!(NavbarState::from_scroll(101.0), NavbarState::Expanded);
        assert_eq!(NavbarState::from_scroll(0.0), NavbarState::Collapsed);
    }

    #[test]
    fn test_on_scroll_tracks_last_offset() {
        let mut nav = NavbarController::new();
        assert!(nav.on_scroll(101.0));
        assert_eq!(nav.state(), NavbarState::Expanded);
        assert!(!nav.on_scroll(500.0));
        assert!(nav.on_scroll(100.0));
        assert_eq!(nav.state(), NavbarState::Collapsed);
        assert_eq!(nav.last_offset_px(), 100.0);
    }

    #[test]
    fn test_exactly_one_presentation_interactive() {
        for state in [NavbarState::Collapsed, NavbarState::Expanded] {
            let inline = presentation_style(state, Presentation::Inline);
            let floating = presentation_style(state, Presentation::Floating);
            assert_ne!(inline.interactive, floating.interactive);
            assert_eq!(inline.opacity + floating.opacity, 1.0);
        }
    }

    #[test]
    fn test_floating_slides_in_when_expanded() {
        let hidden = presentation_style(NavbarState::Collapsed, Presentation::Floating);
        assert_eq!(hidden.offset_y, -100.0);
        assert!(hidden.css().contains("pointer-events: none"));

        let shown = presentation_style(NavbarState::Expanded, Presentation::Floating);
        assert_eq!(shown.offset_y, 0.0);
        assert_eq!(shown.opacity, 1.0);
        assert!(shown.css().contains("pointer-events: auto"));
    }

    #[test]
    fn test_menu_open_then_close() {
        let mut menu = MobileMenu::new();
        assert!(menu.open());
        assert_eq!(menu.state(), MobileMenuState::Open);
        assert_eq!(menu.close(CloseReason::Button), None);
        assert_eq!(menu.state(), MobileMenuState::Closed);
    }

    #[test]
    fn test_menu_close_when_closed_is_noop() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.close(CloseReason::Backdrop), None);
        assert_eq!(menu.close(CloseReason::Link(Anchor::Skills)), None);
        assert_eq!(menu.state(), MobileMenuState::Closed);
    }

    #[test]
    fn test_menu_double_open_is_noop() {
        let mut menu = MobileMenu::new();
        assert!(menu.open());
        assert!(!menu.open());
        assert!(menu.is_open());
    }

    #[test]
    fn test_backdrop_closes_menu() {
        let mut menu = MobileMenu::new();
        menu.open();
        menu.close(CloseReason::Backdrop);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_every_link_closes_menu_and_scrolls() {
        for anchor in Anchor::ALL {
            let scroller = RecordingScroller::default();
            let mut nav = NavbarController::new();
            nav.menu_mut().open();

            assert!(nav.follow_link(anchor, &scroller).is_ok());
            assert_eq!(nav.menu().state(), MobileMenuState::Closed);
            assert_eq!(*scroller.calls.borrow(), vec![anchor.id().to_string()]);
        }
    }

    #[test]
    fn test_missing_anchor_is_reported_not_fatal() {
        let scroller = RecordingScroller {
            missing: vec!["projects"],
            ..Default::default()
        };
        let mut nav = NavbarController::new();
        nav.menu_mut().open();

        let result = nav.follow_link(Anchor::Projects, &scroller);
        assert_eq!(result, Err(NavError::AnchorNotFound("projects".to_string())));
        assert!(!nav.menu().is_open());
    }

    #[test]
    fn test_menu_independent_of_scroll() {
        let mut nav = NavbarController::new();
        nav.menu_mut().open();
        nav.on_scroll(400.0);
        nav.on_scroll(0.0);
        assert!(nav.menu().is_open());
    }

    #[test]
    fn test_anchor_ids() {
        let ids: Vec<_> = Anchor::ALL.iter().map(|a| a.href()).collect();
        assert_eq!(ids, ["#about", "#experience", "#projects", "#skills", "#contact"]);
    }
}
