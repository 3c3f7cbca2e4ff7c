use folio_protocol::{ClassToken, DomCommand, Target};

/// What a page event asks of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

/// Open/closed state of the mobile menu.
///
/// The hamburger control and the menu panel both mirror this single flag,
/// so their `active` markers can never diverge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => Self { open: !self.open },
            MenuAction::Close => Self { open: false },
        }
    }

    /// Marker commands for both nodes, always emitted as a pair.
    pub fn marker_commands(self) -> [DomCommand; 2] {
        [Target::Hamburger, Target::NavMenu].map(|target| DomCommand::SetClass {
            target,
            class: ClassToken::Active,
            enabled: self.open,
        })
    }
}

/// Whether a settled resize to `width` should close the menu.
pub fn closes_on_resize(state: NavState, width: f64, breakpoint: f64) -> bool {
    state.is_open() && width > breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let s = NavState::default();
        assert!(!s.is_open());
        let s = s.apply(MenuAction::Toggle);
        assert!(s.is_open());
        let s = s.apply(MenuAction::Close);
        assert!(!s.is_open());
        assert_eq!(s.apply(MenuAction::Close), s);
    }

    #[test]
    fn markers_always_agree() {
        for open in [false, true] {
            let state = NavState::default();
            let state = if open {
                state.apply(MenuAction::Toggle)
            } else {
                state
            };
            let [a, b] = state.marker_commands();
            match (a, b) {
                (
                    DomCommand::SetClass {
                        target: Target::Hamburger,
                        enabled: x,
                        ..
                    },
                    DomCommand::SetClass {
                        target: Target::NavMenu,
                        enabled: y,
                        ..
                    },
                ) => {
                    assert_eq!(x, y);
                    assert_eq!(x, open);
                }
                other => panic!("unexpected commands: {other:?}"),
            }
        }
    }

    #[test]
    fn resize_closes_only_wide_and_open() {
        let open = NavState::default().apply(MenuAction::Toggle);
        assert!(closes_on_resize(open, 1024.0, 768.0));
        assert!(!closes_on_resize(open, 768.0, 768.0));
        assert!(!closes_on_resize(NavState::default(), 1024.0, 768.0));
    }
}
