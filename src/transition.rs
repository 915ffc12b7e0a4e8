use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How long pane enter/exit animations run, in seconds
pub const TRANSITION_SECONDS: f32 = 0.3;

/// Containers wider than this get the slide/expand treatment; narrower ones
/// get the scale treatment instead
pub const WIDE_LAYOUT_THRESHOLD: f32 = 600.0;

/// An enter/exit animation treatment for a pane.
///
/// The animation clock itself lives in egui (`Context::animate_bool_with_time`
/// hands us a progress value in `[0, 1]`); this enum only turns that progress
/// into concrete paint parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    /// Opacity follows progress, nothing else moves
    Fade,
    /// Fade combined with a horizontal slide from the nearer screen edge
    SlideFade { from_left: bool },
    /// Slide and fade while the pane also grows from zero width
    SlideFadeExpand { from_left: bool },
    /// The pane grows in from zero width at full opacity
    ExpandShrink,
    /// Fade combined with scaling up from 80% size
    ScaleFade,
}

/// Paint parameters for one pane at one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneEffect {
    pub opacity: f32,
    pub offset_x: f32,
    pub width_factor: f32,
    pub scale: f32,
}

impl PaneEffect {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        width_factor: 1.0,
        scale: 1.0,
    };
}

impl Transition {
    /// Pick a treatment based on the available width: wide layouts slide and
    /// expand from the screen edge, narrow ones scale in place.
    pub fn adaptive(container_width: f32, from_left: bool) -> Self {
        if container_width > WIDE_LAYOUT_THRESHOLD {
            Transition::SlideFadeExpand { from_left }
        } else {
            Transition::ScaleFade
        }
    }

    /// Evaluate the treatment at progress `t` (0 = fully hidden, 1 = fully
    /// shown) for a pane that is `pane_width` points wide when at rest.
    pub fn effect(&self, t: f32, pane_width: f32) -> PaneEffect {
        let t = t.clamp(0.0, 1.0);
        let slide = |from_left: bool| {
            let distance = (1.0 - t) * pane_width;
            if from_left {
                -distance
            } else {
                distance
            }
        };

        match *self {
            Transition::Fade => PaneEffect {
                opacity: t,
                ..PaneEffect::IDENTITY
            },
            Transition::SlideFade { from_left } => PaneEffect {
                opacity: t,
                offset_x: slide(from_left),
                ..PaneEffect::IDENTITY
            },
            Transition::SlideFadeExpand { from_left } => PaneEffect {
                opacity: t,
                offset_x: slide(from_left),
                width_factor: t,
                ..PaneEffect::IDENTITY
            },
            Transition::ExpandShrink => PaneEffect {
                width_factor: t,
                ..PaneEffect::IDENTITY
            },
            Transition::ScaleFade => PaneEffect {
                opacity: t,
                scale: 0.8 + 0.2 * t,
                ..PaneEffect::IDENTITY
            },
        }
    }
}

/// The demo screens. Each pairs the two panes with the animation treatments
/// the screen is showing off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DemoVariant {
    /// Both panes fade and slide from their nearer edge
    DefaultMotion,
    /// Right pane expands and shrinks instead of sliding
    ExpandShrink,
    /// Right pane only fades
    FadeOnly,
    /// Treatment depends on the container width
    Adaptive,
}

impl Default for DemoVariant {
    fn default() -> Self {
        DemoVariant::DefaultMotion
    }
}

impl DemoVariant {
    pub const ALL: [DemoVariant; 4] = [
        DemoVariant::DefaultMotion,
        DemoVariant::ExpandShrink,
        DemoVariant::FadeOnly,
        DemoVariant::Adaptive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoVariant::DefaultMotion => "Default Motion",
            DemoVariant::ExpandShrink => "Expand/Shrink",
            DemoVariant::FadeOnly => "Fade Only",
            DemoVariant::Adaptive => "Adaptive",
        }
    }

    pub fn left_transition(&self, container_width: f32) -> Transition {
        match self {
            DemoVariant::Adaptive => Transition::adaptive(container_width, true),
            _ => Transition::SlideFade { from_left: true },
        }
    }

    pub fn right_transition(&self, container_width: f32) -> Transition {
        match self {
            DemoVariant::DefaultMotion => Transition::SlideFade { from_left: false },
            DemoVariant::ExpandShrink => Transition::ExpandShrink,
            DemoVariant::FadeOnly => Transition::Fade,
            DemoVariant::Adaptive => Transition::adaptive(container_width, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_shown_is_identity() {
        for transition in [
            Transition::Fade,
            Transition::SlideFade { from_left: true },
            Transition::SlideFadeExpand { from_left: false },
            Transition::ExpandShrink,
            Transition::ScaleFade,
        ] {
            assert_eq!(transition.effect(1.0, 360.0), PaneEffect::IDENTITY);
        }
    }

    #[test]
    fn test_slide_direction_follows_edge() {
        let left = Transition::SlideFade { from_left: true }.effect(0.25, 400.0);
        assert_eq!(left.offset_x, -300.0);

        let right = Transition::SlideFade { from_left: false }.effect(0.25, 400.0);
        assert_eq!(right.offset_x, 300.0);
    }

    #[test]
    fn test_expand_starts_from_zero_width() {
        let fx = Transition::ExpandShrink.effect(0.0, 360.0);
        assert_eq!(fx.width_factor, 0.0);
        assert_eq!(fx.opacity, 1.0);
    }

    #[test]
    fn test_scale_fade_range() {
        let hidden = Transition::ScaleFade.effect(0.0, 360.0);
        assert_eq!(hidden.scale, 0.8);
        assert_eq!(hidden.opacity, 0.0);

        let half = Transition::ScaleFade.effect(0.5, 360.0);
        assert!((half.scale - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(Transition::Fade.effect(1.5, 100.0), PaneEffect::IDENTITY);
        assert_eq!(Transition::Fade.effect(-0.5, 100.0).opacity, 0.0);
    }

    #[test]
    fn test_adaptive_threshold() {
        assert_eq!(
            Transition::adaptive(800.0, true),
            Transition::SlideFadeExpand { from_left: true }
        );
        assert_eq!(Transition::adaptive(600.0, true), Transition::ScaleFade);
        assert_eq!(Transition::adaptive(480.0, false), Transition::ScaleFade);
    }

    #[test]
    fn test_variant_pane_treatments() {
        assert_eq!(
            DemoVariant::ExpandShrink.right_transition(800.0),
            Transition::ExpandShrink
        );
        assert_eq!(DemoVariant::FadeOnly.right_transition(800.0), Transition::Fade);
        assert_eq!(
            DemoVariant::Adaptive.left_transition(480.0),
            Transition::ScaleFade
        );
        // the left pane keeps the default motion on every non-adaptive screen
        for variant in [
            DemoVariant::DefaultMotion,
            DemoVariant::ExpandShrink,
            DemoVariant::FadeOnly,
        ] {
            assert_eq!(
                variant.left_transition(800.0),
                Transition::SlideFade { from_left: true }
            );
        }
    }
}
