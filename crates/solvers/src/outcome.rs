/// The outcome of a root search.
///
/// Numerical edge cases are data, not errors: a missing bracket or a NaN
/// from the function reports as [`Outcome::NotFound`], leaving the caller
/// free to retry with a different interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Converged to a root within the requested tolerance.
    Found(f64),

    /// The endpoints do not bracket a root, or evaluation produced NaN.
    NotFound,

    /// Stopped before the tolerance was met (iteration cap or observer
    /// request); carries the best available estimate.
    Exhausted(f64),
}

impl Outcome {
    /// Returns the root if the search converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self {
            Outcome::Found(x) => Some(*x),
            Outcome::NotFound | Outcome::Exhausted(_) => None,
        }
    }

    /// Returns the best available estimate, converged or not.
    #[must_use]
    pub fn estimate(&self) -> Option<f64> {
        match self {
            Outcome::Found(x) | Outcome::Exhausted(x) => Some(*x),
            Outcome::NotFound => None,
        }
    }

    /// Returns true if the search converged.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_only_for_found() {
        assert_eq!(Outcome::Found(1.5).root(), Some(1.5));
        assert_eq!(Outcome::Exhausted(1.5).root(), None);
        assert_eq!(Outcome::NotFound.root(), None);
    }

    #[test]
    fn estimate_includes_exhausted() {
        assert_eq!(Outcome::Found(1.5).estimate(), Some(1.5));
        assert_eq!(Outcome::Exhausted(2.5).estimate(), Some(2.5));
        assert_eq!(Outcome::NotFound.estimate(), None);
    }
}
