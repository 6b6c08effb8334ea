/// Convergence tolerance derived from a decimal-places request.
///
/// A request of `p` decimal places gives `epsilon = 10^-p`. Requests
/// outside `[0, 13]` recover to the default of 3 places (`1e-3`) rather
/// than failing; the window keeps epsilon representable and the loop
/// bounds finite in f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Largest accepted decimal-places request.
    pub const MAX_DECIMALS: i32 = 13;

    /// Decimal places used when a request is out of range.
    pub const DEFAULT_DECIMALS: i32 = 3;

    /// Builds a tolerance from a decimal-places request.
    #[must_use]
    pub fn from_decimals(decimals: i32) -> Self {
        let p = if (0..=Self::MAX_DECIMALS).contains(&decimals) {
            decimals
        } else {
            Self::DEFAULT_DECIMALS
        };
        Self {
            epsilon: 10f64.powi(-p),
        }
    }

    /// Returns the epsilon value for convergence checks.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Replaces a non-finite or non-positive epsilon with the default.
    ///
    /// Solver termination requires `epsilon > 0`; recovery here mirrors the
    /// decimal-places policy instead of looping forever or erroring.
    pub(crate) fn clamp_epsilon(epsilon: f64) -> f64 {
        if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            Self::default().epsilon
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::from_decimals(Self::DEFAULT_DECIMALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn in_range_requests_map_to_powers_of_ten() {
        assert_relative_eq!(Tolerance::from_decimals(0).epsilon(), 1.0);
        assert_relative_eq!(Tolerance::from_decimals(3).epsilon(), 1e-3);
        assert_relative_eq!(Tolerance::from_decimals(13).epsilon(), 1e-13);
    }

    #[test]
    fn out_of_range_requests_recover_to_default() {
        assert_relative_eq!(Tolerance::from_decimals(-1).epsilon(), 1e-3);
        assert_relative_eq!(Tolerance::from_decimals(14).epsilon(), 1e-3);
        assert_relative_eq!(Tolerance::default().epsilon(), 1e-3);
    }

    #[test]
    fn clamp_replaces_unusable_epsilon() {
        assert_relative_eq!(Tolerance::clamp_epsilon(2e-7), 2e-7);
        assert_relative_eq!(Tolerance::clamp_epsilon(0.0), 1e-3);
        assert_relative_eq!(Tolerance::clamp_epsilon(-1.0), 1e-3);
        assert_relative_eq!(Tolerance::clamp_epsilon(f64::NAN), 1e-3);
        assert_relative_eq!(Tolerance::clamp_epsilon(f64::INFINITY), 1e-3);
    }
}
