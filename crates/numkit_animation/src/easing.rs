//! Easing functions for animations
//!
//! Every curve maps normalized progress `t` (expected in `[0, 1]`) to eased
//! progress. Most curves stay inside `[0, 1]`; the back and elastic families
//! overshoot on purpose. Input outside `[0, 1]` is evaluated as-is.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Overshoot amount of the back curves
const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;
/// Overshoot of `ease_in_out_back` (`BACK_C1 * 1.525`)
const BACK_C2: f64 = 2.5949095;

const BOUNCE_N: f64 = 7.5625;
const BOUNCE_D: f64 = 2.75;

/// Easing function type
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
    /// Caller-supplied curve
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Every named curve in the catalog, in declaration order
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        self.function()(t)
    }

    /// The curve as a plain function pointer
    pub fn function(&self) -> fn(f64) -> f64 {
        match self {
            Easing::Linear => linear,
            Easing::EaseInSine => ease_in_sine,
            Easing::EaseOutSine => ease_out_sine,
            Easing::EaseInOutSine => ease_in_out_sine,
            Easing::EaseInQuad => ease_in_quad,
            Easing::EaseOutQuad => ease_out_quad,
            Easing::EaseInOutQuad => ease_in_out_quad,
            Easing::EaseInCubic => ease_in_cubic,
            Easing::EaseOutCubic => ease_out_cubic,
            Easing::EaseInOutCubic => ease_in_out_cubic,
            Easing::EaseInQuart => ease_in_quart,
            Easing::EaseOutQuart => ease_out_quart,
            Easing::EaseInOutQuart => ease_in_out_quart,
            Easing::EaseInQuint => ease_in_quint,
            Easing::EaseOutQuint => ease_out_quint,
            Easing::EaseInOutQuint => ease_in_out_quint,
            Easing::EaseInExpo => ease_in_expo,
            Easing::EaseOutExpo => ease_out_expo,
            Easing::EaseInOutExpo => ease_in_out_expo,
            Easing::EaseInCirc => ease_in_circ,
            Easing::EaseOutCirc => ease_out_circ,
            Easing::EaseInOutCirc => ease_in_out_circ,
            Easing::EaseInBack => ease_in_back,
            Easing::EaseOutBack => ease_out_back,
            Easing::EaseInOutBack => ease_in_out_back,
            Easing::EaseInElastic => ease_in_elastic,
            Easing::EaseOutElastic => ease_out_elastic,
            Easing::EaseInOutElastic => ease_in_out_elastic,
            Easing::EaseInBounce => ease_in_bounce,
            Easing::EaseOutBounce => ease_out_bounce,
            Easing::EaseInOutBounce => ease_in_out_bounce,
            Easing::Custom(f) => *f,
        }
    }

    /// Canonical camelCase name, `"custom"` for caller curves
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInSine => "easeInSine",
            Easing::EaseOutSine => "easeOutSine",
            Easing::EaseInOutSine => "easeInOutSine",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInOutQuint => "easeInOutQuint",
            Easing::EaseInExpo => "easeInExpo",
            Easing::EaseOutExpo => "easeOutExpo",
            Easing::EaseInOutExpo => "easeInOutExpo",
            Easing::EaseInCirc => "easeInCirc",
            Easing::EaseOutCirc => "easeOutCirc",
            Easing::EaseInOutCirc => "easeInOutCirc",
            Easing::EaseInBack => "easeInBack",
            Easing::EaseOutBack => "easeOutBack",
            Easing::EaseInOutBack => "easeInOutBack",
            Easing::EaseInElastic => "easeInElastic",
            Easing::EaseOutElastic => "easeOutElastic",
            Easing::EaseInOutElastic => "easeInOutElastic",
            Easing::EaseInBounce => "easeInBounce",
            Easing::EaseOutBounce => "easeOutBounce",
            Easing::EaseInOutBounce => "easeInOutBounce",
            Easing::Custom(_) => "custom",
        }
    }

    /// Whether the curve may leave `[0, 1]` for input inside `[0, 1]`
    pub fn overshoots(&self) -> bool {
        matches!(
            self,
            Easing::EaseInBack
                | Easing::EaseOutBack
                | Easing::EaseInOutBack
                | Easing::EaseInElastic
                | Easing::EaseOutElastic
                | Easing::EaseInOutElastic
        )
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches no catalog curve
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown easing curve: {0}")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    /// Accepts `easeInOutQuad`, `ease-in-out-quad` and `ease_in_out_quad`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Easing::ALL
            .into_iter()
            .find(|e| normalize_name(e.name()) == wanted)
            .ok_or_else(|| UnknownEasing(s.to_string()))
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// Curves
// ============================================================================

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in_sine(t: f64) -> f64 {
    1.0 - ((t * PI) / 2.0).cos()
}

pub fn ease_out_sine(t: f64) -> f64 {
    ((t * PI) / 2.0).sin()
}

pub fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

pub fn ease_in_quart(t: f64) -> f64 {
    t * t * t * t
}

pub fn ease_out_quart(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 - u * u * u * u
}

pub fn ease_in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 - 8.0 * u * u * u * u
    }
}

pub fn ease_in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

pub fn ease_out_quint(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 + u * u * u * u * u
}

pub fn ease_in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 + 16.0 * u * u * u * u * u
    }
}

pub fn ease_in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * t - 10.0)
    }
}

pub fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

pub fn ease_in_out_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        2f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

pub fn ease_in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

pub fn ease_out_circ(t: f64) -> f64 {
    (1.0 - (t - 1.0) * (t - 1.0)).sqrt()
}

pub fn ease_in_out_circ(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - 4.0 * t * t).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powf(2.0)).sqrt() + 1.0) / 2.0
    }
}

pub fn ease_in_back(t: f64) -> f64 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

pub fn ease_out_back(t: f64) -> f64 {
    1.0 + BACK_C3 * (t - 1.0).powf(3.0) + BACK_C1 * (t - 1.0).powf(2.0)
}

pub fn ease_in_out_back(t: f64) -> f64 {
    if t < 0.5 {
        (4.0 * t * t * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powf(2.0) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

pub fn ease_in_elastic(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        -2f64.powf(10.0 * t - 10.0) * (((t * 10.0 - 10.75) * (2.0 * PI)) / 3.0).sin()
    }
}

pub fn ease_out_elastic(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2f64.powf(-10.0 * t) * (((t * 10.0 - 0.75) * (2.0 * PI)) / 3.0).sin() + 1.0
    }
}

pub fn ease_in_out_elastic(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        -(2f64.powf(20.0 * t - 10.0) * (((20.0 * t - 11.125) * (2.0 * PI)) / 4.5).sin()) / 2.0
    } else {
        (2f64.powf(-20.0 * t + 10.0) * (((20.0 * t - 11.125) * (2.0 * PI)) / 4.5).sin()) / 2.0
            + 1.0
    }
}

pub fn ease_in_bounce(t: f64) -> f64 {
    1.0 - ease_out_bounce(1.0 - t)
}

/// Four decaying parabolic bounces landing exactly on 1.0
pub fn ease_out_bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        BOUNCE_N * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        BOUNCE_N * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D;
        BOUNCE_N * t * t + 0.984375
    }
}

pub fn ease_in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - ease_out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + ease_out_bounce(2.0 * t - 1.0)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn sweep() -> impl Iterator<Item = f64> {
        (0..=100).map(|i| i as f64 / 100.0)
    }

    #[test]
    fn test_endpoints() {
        for easing in Easing::ALL {
            assert!(
                easing.apply(0.0).abs() < EPS,
                "{easing}(0) = {}",
                easing.apply(0.0)
            );
            assert!(
                (easing.apply(1.0) - 1.0).abs() < EPS,
                "{easing}(1) = {}",
                easing.apply(1.0)
            );
        }
    }

    #[test]
    fn test_special_cased_endpoints_are_exact() {
        for easing in [
            Easing::EaseInExpo,
            Easing::EaseOutExpo,
            Easing::EaseInOutExpo,
            Easing::EaseInElastic,
            Easing::EaseOutElastic,
            Easing::EaseInOutElastic,
            Easing::EaseInBounce,
            Easing::EaseOutBounce,
            Easing::EaseInOutBounce,
            Easing::EaseOutBack,
            Easing::EaseInOutBack,
        ] {
            assert_eq!(easing.apply(1.0), 1.0, "{easing}");
        }
        assert_eq!(ease_in_expo(0.0), 0.0);
        assert_eq!(ease_in_out_elastic(0.0), 0.0);
    }

    #[test]
    fn test_in_bounce_mirrors_out_bounce() {
        for t in sweep() {
            assert_eq!(ease_in_bounce(t), 1.0 - ease_out_bounce(1.0 - t));
        }
    }

    #[test]
    fn test_non_overshooting_curves_stay_in_unit_range() {
        for easing in Easing::ALL.into_iter().filter(|e| !e.overshoots()) {
            for t in sweep() {
                let v = easing.apply(t);
                assert!(
                    (-EPS..=1.0 + EPS).contains(&v),
                    "{easing}({t}) = {v} left [0, 1]"
                );
            }
        }
    }

    #[test]
    fn test_back_overshoots() {
        assert!(ease_in_back(0.2) < 0.0);
        assert!(ease_out_back(0.8) > 1.0);
        assert!(ease_out_elastic(0.1) > 1.0);
    }

    #[test]
    fn test_elastic_and_back_reference_values() {
        // Bit-exact with the reference curves near zero, where the
        // phase grouping changes the last digits
        assert_eq!(ease_in_elastic(0.002), -0.0004587533269130068);
        assert!((ease_out_elastic(0.3) - 0.875).abs() < EPS);
        assert!((ease_in_out_elastic(0.3) - 0.02393888884746804).abs() < EPS);
        assert!((ease_out_back(0.8) - 1.04645056).abs() < EPS);
    }

    #[test]
    fn test_in_out_midpoints() {
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_quart(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_quint(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_circ(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_expo(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_bounce(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_power_curves_match_closed_forms() {
        for t in sweep() {
            assert!((ease_out_quad(t) - (1.0 - (1.0 - t).powi(2))).abs() < EPS);
            assert!((ease_out_cubic(t) - (1.0 - (1.0 - t).powi(3))).abs() < EPS);
            assert!((ease_out_quart(t) - (1.0 - (1.0 - t).powi(4))).abs() < EPS);
            assert!((ease_out_quint(t) - (1.0 - (1.0 - t).powi(5))).abs() < EPS);
        }
        assert!((ease_in_out_quad(0.3) - 0.18).abs() < EPS);
    }

    #[test]
    fn test_names_round_trip() {
        for easing in Easing::ALL {
            let parsed: Easing = easing.name().parse().unwrap();
            assert_eq!(parsed.name(), easing.name());
        }
    }

    #[test]
    fn test_name_spellings() {
        let expected = Easing::EaseInOutQuart.name();
        for spelling in ["easeInOutQuart", "ease-in-out-quart", "EASE_IN_OUT_QUART"] {
            assert_eq!(spelling.parse::<Easing>().unwrap().name(), expected);
        }
        assert_eq!(
            "wobble".parse::<Easing>().unwrap_err(),
            UnknownEasing("wobble".to_string())
        );
    }

    #[test]
    fn test_custom_curve() {
        fn squared(t: f64) -> f64 {
            t * t
        }
        let easing = Easing::Custom(squared);
        assert_eq!(easing.apply(0.5), 0.25);
        assert_eq!(easing.name(), "custom");
        assert!(!easing.overshoots());
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(Easing::default().apply(0.37), 0.37);
    }
}
