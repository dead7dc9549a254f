//! Presented/hidden view decorators.
//!
//! A decorator maps a caller-owned `presented` flag to a [`VisualState`].
//! When the flag flips, [`animate`] describes the animation between the old
//! and new states; it holds no state of its own.

use std::time::Duration;

use serde::Serialize;

use super::curve::AnimationCurve;
use super::DEFAULT_SLIDE_DISTANCE;

/// Edge a view slides from or toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Leading,
    Trailing,
    Top,
    Bottom,
}

impl Edge {
    /// Offset `(x, y)` that places a view `distance` units past this edge.
    pub fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            Edge::Leading => (-distance, 0.0),
            Edge::Trailing => (distance, 0.0),
            Edge::Top => (0.0, -distance),
            Edge::Bottom => (0.0, distance),
        }
    }
}

/// Renderable properties a decorator animates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl VisualState {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// Interpolate toward `to`. `t` may overshoot for springs; opacity is
    /// clamped to `[0, 1]`.
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "edge", rename_all = "snake_case")]
pub enum Decorator {
    /// Opacity 0 to 1.
    Fade,
    /// Offset from an edge plus opacity.
    Slide(Edge),
    /// Scale 0.8 to 1 plus opacity.
    ScalePop,
}

impl Decorator {
    pub const POP_START_SCALE: f64 = 0.8;

    pub fn curve(&self) -> AnimationCurve {
        match self {
            Decorator::Fade => AnimationCurve::EASE_IN_OUT,
            Decorator::Slide(_) | Decorator::ScalePop => AnimationCurve::SPRING,
        }
    }

    pub fn hidden_state(&self, distance: f64) -> VisualState {
        match self {
            Decorator::Fade => VisualState {
                opacity: 0.0,
                ..VisualState::VISIBLE
            },
            Decorator::Slide(edge) => {
                let (offset_x, offset_y) = edge.offset(distance);
                VisualState {
                    opacity: 0.0,
                    offset_x,
                    offset_y,
                    scale: 1.0,
                }
            }
            Decorator::ScalePop => VisualState {
                opacity: 0.0,
                scale: Self::POP_START_SCALE,
                ..VisualState::VISIBLE
            },
        }
    }
}

/// A decorator plus the per-call-site knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoratorConfig {
    pub decorator: Decorator,
    pub delay: Duration,
    /// Only used by [`Decorator::Slide`].
    pub distance: f64,
}

impl DecoratorConfig {
    pub fn new(decorator: Decorator) -> Self {
        Self {
            decorator,
            delay: Duration::ZERO,
            distance: DEFAULT_SLIDE_DISTANCE,
        }
    }

    pub fn fade() -> Self {
        Self::new(Decorator::Fade)
    }

    pub fn slide(edge: Edge) -> Self {
        Self::new(Decorator::Slide(edge))
    }

    pub fn scale_pop() -> Self {
        Self::new(Decorator::ScalePop)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Resting state for the given flag.
    pub fn state(&self, presented: bool) -> VisualState {
        if presented {
            VisualState::VISIBLE
        } else {
            self.decorator.hidden_state(self.distance)
        }
    }
}

/// Everything needed to drive one animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationInstruction {
    pub from: VisualState,
    pub to: VisualState,
    pub curve: AnimationCurve,
    pub delay: Duration,
}

impl AnimationInstruction {
    /// Delay plus the curve's settle time, saturating at `Duration::MAX`.
    pub fn total_duration(&self) -> Duration {
        self.delay.saturating_add(self.curve.settle_duration())
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_duration()
    }

    /// State `elapsed` after the flag flipped. Holds `from` during the delay
    /// and is exactly `to` once finished.
    pub fn state_at(&self, elapsed: Duration) -> VisualState {
        if self.is_finished(elapsed) {
            return self.to;
        }
        match elapsed.checked_sub(self.delay) {
            None => self.from,
            Some(running) => self.from.lerp(&self.to, self.curve.progress(running)),
        }
    }

    /// Same endpoints, applied immediately.
    pub fn reduced(self) -> Self {
        Self {
            curve: AnimationCurve::INSTANT,
            delay: Duration::ZERO,
            ..self
        }
    }
}

/// Describe the animation for a flag change, or `None` if it didn't change.
pub fn animate(
    config: &DecoratorConfig,
    was_presented: bool,
    is_presented: bool,
) -> Option<AnimationInstruction> {
    if was_presented == is_presented {
        return None;
    }
    Some(AnimationInstruction {
        from: config.state(was_presented),
        to: config.state(is_presented),
        curve: config.decorator.curve(),
        delay: config.delay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn configs() -> Vec<DecoratorConfig> {
        vec![
            DecoratorConfig::fade(),
            DecoratorConfig::slide(Edge::Leading),
            DecoratorConfig::slide(Edge::Trailing),
            DecoratorConfig::slide(Edge::Top),
            DecoratorConfig::slide(Edge::Bottom),
            DecoratorConfig::scale_pop(),
        ]
    }

    #[test]
    fn unchanged_flag_produces_nothing() {
        for config in configs() {
            assert!(animate(&config, true, true).is_none());
            assert!(animate(&config, false, false).is_none());
        }
    }

    #[test]
    fn fade_uses_ease_in_out() {
        let instruction = animate(&DecoratorConfig::fade(), false, true).unwrap();
        assert_eq!(instruction.curve, AnimationCurve::EASE_IN_OUT);
        assert_eq!(instruction.from.opacity, 0.0);
        assert_eq!(instruction.from.scale, 1.0);
    }

    #[test]
    fn slide_offsets_by_edge() {
        let hidden = |edge| DecoratorConfig::slide(edge).state(false);
        assert_eq!((hidden(Edge::Leading).offset_x, hidden(Edge::Leading).offset_y), (-50.0, 0.0));
        assert_eq!((hidden(Edge::Trailing).offset_x, hidden(Edge::Trailing).offset_y), (50.0, 0.0));
        assert_eq!((hidden(Edge::Top).offset_x, hidden(Edge::Top).offset_y), (0.0, -50.0));
        assert_eq!((hidden(Edge::Bottom).offset_x, hidden(Edge::Bottom).offset_y), (0.0, 50.0));
        assert_eq!(
            DecoratorConfig::slide(Edge::Bottom).with_distance(80.0).state(false).offset_y,
            80.0
        );
    }

    #[test]
    fn scale_pop_starts_small_and_transparent() {
        let instruction = animate(&DecoratorConfig::scale_pop(), false, true).unwrap();
        assert_eq!(instruction.from.scale, 0.8);
        assert_eq!(instruction.from.opacity, 0.0);
        assert_eq!(instruction.curve, AnimationCurve::SPRING);
    }

    #[test]
    fn delay_holds_start_state() {
        let config = DecoratorConfig::fade().with_delay(Duration::from_millis(300));
        let instruction = animate(&config, false, true).unwrap();
        assert_eq!(instruction.state_at(Duration::from_millis(299)), instruction.from);
        assert_eq!(
            instruction.total_duration(),
            Duration::from_millis(300) + AnimationCurve::EASE_IN_OUT.settle_duration()
        );
    }

    #[test]
    fn hiding_ends_at_hidden_state() {
        let config = DecoratorConfig::slide(Edge::Top);
        let instruction = animate(&config, true, false).unwrap();
        let end = instruction.state_at(instruction.total_duration());
        assert_eq!(end, config.state(false));
    }

    #[test]
    fn maximal_delay_holds_start_state_without_overflow() {
        let config = DecoratorConfig::fade().with_delay(Duration::MAX);
        let instruction = animate(&config, false, true).unwrap();
        assert_eq!(instruction.total_duration(), Duration::MAX);
        assert!(!instruction.is_finished(Duration::from_millis(10)));
        assert_eq!(instruction.state_at(Duration::from_millis(10)), instruction.from);
        assert_eq!(instruction.state_at(Duration::MAX), VisualState::VISIBLE);
    }

    #[test]
    fn reduced_motion_jumps_immediately() {
        let config = DecoratorConfig::scale_pop().with_delay(Duration::from_secs(1));
        let instruction = animate(&config, false, true).unwrap().reduced();
        assert_eq!(instruction.total_duration(), Duration::ZERO);
        assert_eq!(instruction.state_at(Duration::ZERO), VisualState::VISIBLE);
    }

    proptest! {
        #[test]
        fn presenting_always_ends_fully_visible(index in 0usize..6, delay_ms in 0u64..5_000) {
            let config = configs()[index].with_delay(Duration::from_millis(delay_ms));
            let instruction = animate(&config, false, true).unwrap();
            let end = instruction.state_at(instruction.total_duration());
            prop_assert_eq!(end, VisualState::VISIBLE);
            prop_assert_eq!(
                instruction.state_at(instruction.total_duration() + Duration::from_secs(1)),
                VisualState::VISIBLE
            );
        }

        #[test]
        fn opacity_stays_in_range(index in 0usize..6, ms in 0u64..2_000) {
            let instruction = animate(&configs()[index], false, true).unwrap();
            let state = instruction.state_at(Duration::from_millis(ms));
            prop_assert!((0.0..=1.0).contains(&state.opacity));
        }
    }
}
