//! Named animation presets.
//!
//! Everything here is a constant or a pure function. Call sites pick a
//! curve, decorator or transition by name instead of restating parameters,
//! and evaluate the resulting [`AnimationInstruction`] against elapsed time.

mod curve;
mod decorator;
mod transition;

pub use curve::AnimationCurve;
pub use decorator::{animate, AnimationInstruction, Decorator, DecoratorConfig, Edge, VisualState};
pub use transition::{Phase, Transition, TransitionEffect};

use serde::Serialize;

/// Offset magnitude for slide decorators.
pub const DEFAULT_SLIDE_DISTANCE: f64 = 50.0;

pub mod durations {
    use std::time::Duration;

    pub(crate) const MEDIUM_SECS: f64 = 0.4;

    pub const SHORT: Duration = Duration::from_millis(200);
    pub const MEDIUM: Duration = Duration::from_millis(400);
    pub const LONG: Duration = Duration::from_millis(600);
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub curves: Vec<(&'static str, AnimationCurve)>,
    pub durations_secs: Vec<(&'static str, f64)>,
    pub transitions: Vec<(&'static str, Transition)>,
}

/// Every named preset, for listing.
pub fn catalog() -> Catalog {
    Catalog {
        curves: vec![
            ("spring", AnimationCurve::SPRING),
            ("ease_in", AnimationCurve::EASE_IN),
            ("ease_out", AnimationCurve::EASE_OUT),
            ("ease_in_out", AnimationCurve::EASE_IN_OUT),
            ("quick_bounce", AnimationCurve::QUICK_BOUNCE),
            ("gentle_pop", AnimationCurve::GENTLE_POP),
            ("snappy", AnimationCurve::SNAPPY),
        ],
        durations_secs: vec![
            ("short", durations::SHORT.as_secs_f64()),
            ("medium", durations::MEDIUM.as_secs_f64()),
            ("long", durations::LONG.as_secs_f64()),
        ],
        transitions: vec![
            ("slide_up", Transition::SLIDE_UP),
            ("slide_down", Transition::SLIDE_DOWN),
            ("slide_in", Transition::SLIDE_IN),
            ("pop_in", Transition::POP_IN),
        ],
    }
}

/// Look up a curve preset by its catalog name.
pub fn curve_named(name: &str) -> Option<AnimationCurve> {
    catalog()
        .curves
        .into_iter()
        .find_map(|(n, c)| (n == name).then_some(c))
}
