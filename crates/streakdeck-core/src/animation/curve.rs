//! Timing curves.
//!
//! Springs follow a damped harmonic oscillator parameterised the way UI
//! toolkits usually expose them: `response` is the undamped period in
//! seconds and `damping_fraction` is the damping ratio. Timed curves are CSS
//! style cubic béziers over a fixed duration.

use std::f64::consts::PI;
use std::time::Duration;

use serde::Serialize;

use super::durations::MEDIUM_SECS;

/// Spring envelope below this counts as settled.
const SETTLE_THRESHOLD: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationCurve {
    Spring {
        response: f64,
        damping_fraction: f64,
    },
    Bezier {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        duration_secs: f64,
    },
    /// Jump straight to the end state.
    Instant,
}

impl AnimationCurve {
    /// Moderate bounce.
    pub const SPRING: Self = Self::Spring {
        response: 0.5,
        damping_fraction: 0.7,
    };
    pub const EASE_IN: Self = Self::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
        duration_secs: MEDIUM_SECS,
    };
    pub const EASE_OUT: Self = Self::Bezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
        duration_secs: MEDIUM_SECS,
    };
    pub const EASE_IN_OUT: Self = Self::Bezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
        duration_secs: MEDIUM_SECS,
    };
    /// Stiff, visibly bouncy spring.
    pub const QUICK_BOUNCE: Self = Self::Spring {
        response: 0.3,
        damping_fraction: 0.5,
    };
    /// Soft spring with a small overshoot.
    pub const GENTLE_POP: Self = Self::Spring {
        response: 0.6,
        damping_fraction: 0.8,
    };
    /// Fast, nearly critically damped spring.
    pub const SNAPPY: Self = Self::Spring {
        response: 0.25,
        damping_fraction: 0.9,
    };
    pub const INSTANT: Self = Self::Instant;

    /// Time after which [`progress`](Self::progress) is exactly 1.
    pub fn settle_duration(&self) -> Duration {
        match *self {
            AnimationCurve::Spring {
                response,
                damping_fraction,
            } => {
                let decay = damping_fraction.clamp(0.01, 1.0) * angular_frequency(response);
                secs_to_duration((1.0 / SETTLE_THRESHOLD).ln() / decay)
            }
            AnimationCurve::Bezier { duration_secs, .. } => secs_to_duration(duration_secs.max(0.0)),
            AnimationCurve::Instant => Duration::ZERO,
        }
    }

    /// Fraction of the way from start to end after `elapsed`.
    ///
    /// Starts at 0 and ends at exactly 1. Springs may overshoot 1 in between.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.settle_duration() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64();
        match *self {
            AnimationCurve::Spring {
                response,
                damping_fraction,
            } => spring_position(response, damping_fraction, t),
            AnimationCurve::Bezier {
                x1,
                y1,
                x2,
                y2,
                duration_secs,
            } => cubic_bezier(x1, y1, x2, y2, t / duration_secs),
            AnimationCurve::Instant => 1.0,
        }
    }
}

/// Seconds too large for a `Duration` saturate; NaN reads as zero.
fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

fn angular_frequency(response: f64) -> f64 {
    2.0 * PI / response.max(f64::EPSILON)
}

fn spring_position(response: f64, damping_fraction: f64, t: f64) -> f64 {
    let omega = angular_frequency(response);
    let zeta = damping_fraction.clamp(0.01, 1.0);
    let envelope = (-zeta * omega * t).exp();

    if zeta >= 1.0 {
        return 1.0 - envelope * (1.0 + omega * t);
    }

    let damped = omega * (1.0 - zeta * zeta).sqrt();
    1.0 - envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
}

/// Evaluate a unit cubic bézier with control points `(x1, y1)`, `(x2, y2)` at
/// horizontal position `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    let bezier = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton first, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..40 {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AnimationCurve; 7] = [
        AnimationCurve::SPRING,
        AnimationCurve::EASE_IN,
        AnimationCurve::EASE_OUT,
        AnimationCurve::EASE_IN_OUT,
        AnimationCurve::QUICK_BOUNCE,
        AnimationCurve::GENTLE_POP,
        AnimationCurve::SNAPPY,
    ];

    #[test]
    fn every_preset_starts_at_zero_and_settles_at_one() {
        for curve in ALL {
            assert!(curve.progress(Duration::ZERO).abs() < 1e-6, "{curve:?}");
            assert_eq!(curve.progress(curve.settle_duration()), 1.0);
            assert_eq!(curve.progress(Duration::from_secs(10)), 1.0);
        }
    }

    #[test]
    fn ease_curves_use_medium_duration() {
        for curve in [
            AnimationCurve::EASE_IN,
            AnimationCurve::EASE_OUT,
            AnimationCurve::EASE_IN_OUT,
        ] {
            assert_eq!(curve.settle_duration(), Duration::from_millis(400));
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        let half = AnimationCurve::EASE_IN_OUT.progress(Duration::from_millis(200));
        assert!((half - 0.5).abs() < 1e-3, "got {half}");
    }

    #[test]
    fn ease_in_lags_ease_out() {
        let t = Duration::from_millis(100);
        assert!(AnimationCurve::EASE_IN.progress(t) < AnimationCurve::EASE_OUT.progress(t));
    }

    #[test]
    fn bouncy_spring_overshoots() {
        let peak = (1..80)
            .map(|ms| AnimationCurve::QUICK_BOUNCE.progress(Duration::from_millis(ms * 10)))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn snappy_settles_before_gentle_pop() {
        assert!(
            AnimationCurve::SNAPPY.settle_duration() < AnimationCurve::GENTLE_POP.settle_duration()
        );
    }

    #[test]
    fn huge_parameters_saturate_instead_of_panicking() {
        let slow_spring = AnimationCurve::Spring {
            response: 1e300,
            damping_fraction: 0.7,
        };
        assert_eq!(slow_spring.settle_duration(), Duration::MAX);
        assert!(slow_spring.progress(Duration::from_secs(1)) < 1.0);

        let endless = AnimationCurve::Bezier {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
            duration_secs: f64::INFINITY,
        };
        assert_eq!(endless.settle_duration(), Duration::MAX);
    }

    #[test]
    fn instant_is_always_done() {
        assert_eq!(AnimationCurve::INSTANT.settle_duration(), Duration::ZERO);
        assert_eq!(AnimationCurve::INSTANT.progress(Duration::ZERO), 1.0);
    }
}
