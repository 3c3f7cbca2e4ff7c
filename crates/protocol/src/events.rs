use serde::{Deserialize, Serialize};

use crate::types::{SectionBox, TimerId};

/// A browser event, reduced to the data the controller decides on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    /// Window `load`.
    Load,

    HamburgerClick,
    MobileCloseClick,
    NavLinkClick { index: usize },

    /// Click on any `a[href^="#"]`; `href` is the raw attribute value.
    AnchorClick { href: String },

    /// Window `scroll`. Sections are re-measured on every event.
    Scroll {
        offset: f64,
        sections: Vec<SectionBox>,
    },

    /// Window `resize`, carrying `innerWidth`.
    Resize { width: f64 },

    /// Document `keydown`, carrying `KeyboardEvent.key`.
    KeyDown { key: String },

    /// An `IntersectionObserver` entry for a revealable element.
    Intersection { index: usize, is_intersecting: bool },

    /// Contact form `submit`, with the raw (untrimmed) field values.
    Submit {
        name: String,
        email: String,
        message: String,
    },

    ScrollTopClick,
    ScrollTopHover { hovered: bool },

    /// A timer started by [`crate::DomCommand::StartTimer`] elapsed.
    TimerFired { timer: TimerId, generation: u64 },
}
