//! Core state machines and content for the portfolio page
//!
//! Nothing in here touches the DOM; the `ui` layer feeds browser events in.

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod navbar;
pub mod reveal;

pub use contact::{
    ContactError, ContactField, ContactFormController, ContactRequest, ContactTransport, FormPhase,
    SubmitError, Submission, Ticket, ValidationError,
};
pub use motion::{AmbientLoop, AnimationStep, Easing, Pose, Stagger};
pub use navbar::{
    Anchor, AnchorScroller, CloseReason, MobileMenu, MobileMenuState, NavError, NavbarController,
    NavbarState, Presentation,
};
pub use reveal::{RevealLatch, RevealState, TrackedElement};
