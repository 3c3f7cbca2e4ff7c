use serde::{Deserialize, Serialize};

use crate::tokens::{ClassToken, StyleProperty};
use crate::types::{Target, TimerId};

/// A single, stateless DOM mutation.
///
/// The controller emits a `Vec<DomCommand>` for each page event. The adapter
/// applies the list in order; each command carries all the data it needs.
/// Commands addressing an element that does not exist are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    /// Add (`enabled`) or remove a class on an element.
    SetClass {
        target: Target,
        class: ClassToken,
        enabled: bool,
    },

    /// Set one inline style property.
    SetStyle {
        target: Target,
        property: StyleProperty,
        value: String,
    },

    /// Set the `src` of an image element.
    SetImageSource { target: Target, src: String },

    /// Create the scroll-to-top button and append it to `<body>`.
    CreateScrollTopButton {
        id: String,
        label: String,
        css: String,
    },

    /// Remove the scroll-to-top button from the document.
    RemoveScrollTopButton,

    /// Scroll the element with this id into view, top edge aligned.
    ScrollIntoView { id: String, behavior: ScrollBehavior },

    /// Scroll the window back to offset 0.
    ScrollToTop { behavior: ScrollBehavior },

    /// Suppress the default action of the event being handled.
    PreventDefault,

    /// Show a blocking `window.alert`.
    Alert { message: String },

    /// Stop observing a revealable element.
    Unobserve { index: usize },

    /// Start (or restart) a browser timer. Any running timer with the same
    /// id is cancelled first. The adapter echoes `generation` back in
    /// [`crate::PageEvent::TimerFired`].
    StartTimer {
        timer: TimerId,
        generation: u64,
        delay_ms: u32,
        repeating: bool,
    },

    /// Cancel a browser timer if running.
    CancelTimer { timer: TimerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Smooth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_with_variant_tags() {
        let cmd = DomCommand::SetClass {
            target: Target::NavLink(2),
            class: ClassToken::Active,
            enabled: true,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"SetClass":{"target":{"NavLink":2},"class":"Active","enabled":true}}"#
        );
    }

    #[test]
    fn timer_command_survives_json() {
        let cmd = DomCommand::StartTimer {
            timer: TimerId::ResizeSettle,
            generation: 7,
            delay_ms: 250,
            repeating: false,
        };
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        let back: Option<DomCommand> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(cmd));
    }
}
