//! Leptos components and browser hooks
//!
//! Components translate DOM events into calls on the `core` state machines and
//! render from their state.

pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod transport;

pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use pages::{NotFoundPage, PortfolioPage};
pub use reveal::{use_entered, use_reveal};
pub use scroll::{DomScroller, scroll_to_anchor, use_scroll_offset};
pub use transport::HttpContactTransport;
