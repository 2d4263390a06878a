//! Collapsible property-section state machine.
//!
//! Sections animate between collapsed and expanded by measuring content
//! height first, then transitioning, then pinning height to `auto` so later
//! content growth (conditional sub-fields appearing) needs no re-toggle.

use serde::{Deserialize, Serialize};

/// Duration of the expand/collapse transition in seconds.
pub const TRANSITION_SECONDS: f32 = 0.3;

/// Property-editor sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Live element preview.
    Preview,
    /// Content fields (source, alt, caption / text body).
    Content,
    /// Dimensions and spacing.
    Layout,
    /// Border, background, shadow.
    Styling,
    /// Image filters and overlay.
    Effects,
    /// Font family and per-type typography.
    Typography,
    /// Text shadows and advanced type settings.
    AdvancedTypography,
    /// Entrance animation.
    Animation,
    /// Visibility and mobile overrides.
    Responsive,
    /// ARIA attributes.
    Accessibility,
}

/// Height the rendering layer should apply to the section body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionHeight {
    /// Fully collapsed.
    Zero,
    /// Mid-transition, animating to or from the measured pixel height.
    Fixed(f32),
    /// Expanded; content growth requires no re-measure.
    Auto,
}

/// Collapse state machine for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollapseState {
    /// Body hidden.
    Collapsed,
    /// Animating open toward the captured content height.
    Expanding {
        /// Content height measured right before the animation started.
        content_height: f32,
    },
    /// Body visible at `auto` height.
    Expanded,
    /// Animating closed from the captured content height.
    Collapsing {
        /// Content height measured right before the animation started.
        content_height: f32,
    },
}

/// One section pane: its kind plus collapse state.
#[derive(Debug, Clone)]
pub struct SectionPane {
    /// Which section this pane shows.
    pub kind: SectionKind,
    state: CollapseState,
    /// External override: pinned open, toggling disabled.
    force_expanded: bool,
}

impl SectionPane {
    /// Create a pane, expanded or collapsed.
    #[must_use]
    pub const fn new(kind: SectionKind, expanded: bool) -> Self {
        Self {
            kind,
            state: if expanded {
                CollapseState::Expanded
            } else {
                CollapseState::Collapsed
            },
            force_expanded: false,
        }
    }

    /// Create a pane pinned open; [`SectionPane::toggle`] becomes a no-op.
    #[must_use]
    pub const fn forced_open(kind: SectionKind) -> Self {
        Self {
            kind,
            state: CollapseState::Expanded,
            force_expanded: true,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CollapseState {
        self.state
    }

    /// Whether the body is visible at all (any state but collapsed).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.state, CollapseState::Collapsed)
    }

    /// Begin a transition. `measured_height` is the body's content height in
    /// pixels, captured by the caller before animating. Toggling mid-flight
    /// reverses the transition with the same captured height.
    pub fn toggle(&mut self, measured_height: f32) {
        if self.force_expanded {
            return;
        }
        self.state = match self.state {
            CollapseState::Collapsed => CollapseState::Expanding {
                content_height: measured_height,
            },
            CollapseState::Expanding { content_height } => {
                CollapseState::Collapsing { content_height }
            }
            CollapseState::Expanded => CollapseState::Collapsing {
                content_height: measured_height,
            },
            CollapseState::Collapsing { content_height } => {
                CollapseState::Expanding { content_height }
            }
        };
    }

    /// Complete the current transition after [`TRANSITION_SECONDS`] elapsed.
    ///
    /// Expanding pins the height to `auto`; collapsing settles at zero.
    /// No-op while not transitioning.
    pub fn finish_transition(&mut self) {
        self.state = match self.state {
            CollapseState::Expanding { .. } | CollapseState::Expanded => CollapseState::Expanded,
            CollapseState::Collapsing { .. } | CollapseState::Collapsed => {
                CollapseState::Collapsed
            }
        };
    }

    /// Height the rendering layer should apply right now.
    #[must_use]
    pub const fn height(&self) -> SectionHeight {
        match self.state {
            CollapseState::Collapsed => SectionHeight::Zero,
            CollapseState::Expanding { content_height }
            | CollapseState::Collapsing { content_height } => {
                SectionHeight::Fixed(content_height)
            }
            CollapseState::Expanded => SectionHeight::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_cycle() {
        let mut pane = SectionPane::new(SectionKind::Styling, false);
        assert_eq!(pane.height(), SectionHeight::Zero);

        pane.toggle(240.0);
        assert_eq!(pane.height(), SectionHeight::Fixed(240.0));
        assert!(pane.is_open());

        pane.finish_transition();
        assert_eq!(pane.state(), CollapseState::Expanded);
        assert_eq!(pane.height(), SectionHeight::Auto);
    }

    #[test]
    fn test_collapse_cycle() {
        let mut pane = SectionPane::new(SectionKind::Effects, true);
        pane.toggle(180.0);
        assert_eq!(pane.height(), SectionHeight::Fixed(180.0));
        pane.finish_transition();
        assert_eq!(pane.state(), CollapseState::Collapsed);
    }

    #[test]
    fn test_mid_flight_reversal_keeps_captured_height() {
        let mut pane = SectionPane::new(SectionKind::Content, false);
        pane.toggle(120.0);
        pane.toggle(999.0); // reversal ignores the new measurement
        assert_eq!(
            pane.state(),
            CollapseState::Collapsing {
                content_height: 120.0
            }
        );
    }

    #[test]
    fn test_force_expanded_disables_toggle() {
        let mut pane = SectionPane::forced_open(SectionKind::Preview);
        pane.toggle(50.0);
        assert_eq!(pane.state(), CollapseState::Expanded);
        assert_eq!(pane.height(), SectionHeight::Auto);
    }

    #[test]
    fn test_finish_without_transition_is_noop() {
        let mut pane = SectionPane::new(SectionKind::Animation, true);
        pane.finish_transition();
        assert_eq!(pane.state(), CollapseState::Expanded);
    }
}
