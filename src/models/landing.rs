use crate::constants::CRASH_VELOCITY_THRESHOLD;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingVerdict {
    SafeLanding,
    CrashLanding,
}

impl LandingVerdict {
    /// Classifies a touchdown from the vertical velocity at ground contact.
    pub fn classify(vertical_velocity: f64) -> Self {
        if vertical_velocity <= CRASH_VELOCITY_THRESHOLD {
            LandingVerdict::CrashLanding
        } else {
            LandingVerdict::SafeLanding
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, LandingVerdict::SafeLanding)
    }
}

impl fmt::Display for LandingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LandingVerdict::SafeLanding => write!(f, "Safe Landing"),
            LandingVerdict::CrashLanding => write!(f, "Crash Landing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0 => LandingVerdict::SafeLanding; "resting on the ground")]
    #[test_case(3.0 => LandingVerdict::SafeLanding; "moving upward")]
    #[test_case(-0.98 => LandingVerdict::SafeLanding; "one tick of free fall")]
    #[test_case(-4.999 => LandingVerdict::SafeLanding; "just above threshold")]
    #[test_case(-5.0 => LandingVerdict::CrashLanding; "exactly at threshold")]
    #[test_case(-40.0 => LandingVerdict::CrashLanding; "fast descent")]
    fn test_classify(vy: f64) -> LandingVerdict {
        LandingVerdict::classify(vy)
    }

    #[test]
    fn display_matches_report_wording() {
        assert_eq!(LandingVerdict::SafeLanding.to_string(), "Safe Landing");
        assert_eq!(LandingVerdict::CrashLanding.to_string(), "Crash Landing");
        assert!(LandingVerdict::SafeLanding.is_safe());
        assert!(!LandingVerdict::CrashLanding.is_safe());
    }
}
