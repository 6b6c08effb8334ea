//! Root finding by interval halving.
//!
//! Bisection brackets a sign change and halves the interval until its width
//! drops below epsilon. Convergence is guaranteed for any positive epsilon:
//! each iteration halves the bracket, so the loop finishes in at most
//! `ceil(log2(width / epsilon))` steps and no iteration cap is needed.
//!
//! The endpoints may be given in either order; widths are compared by
//! absolute value and the narrowing logic is symmetric. An endpoint that
//! evaluates to exactly zero counts as "no guaranteed bracket" and reports
//! [`Outcome::NotFound`] — Newton's method treats that case differently
//! (see [`crate::newton`](mod@crate::newton)).

use crate::{Function, Observer, Outcome, Tolerance};

/// Control actions supported by the bisection solver.
pub enum Action {
    /// Stop the solver early, reporting the current midpoint as
    /// [`Outcome::Exhausted`].
    StopEarly,
}

/// Iteration event emitted once per midpoint evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket at the start of the iteration.
    pub bracket: [f64; 2],
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Function value at the midpoint.
    pub fx: f64,
}

/// Finds a root of `f` on the bracket by bisection.
///
/// Returns [`Outcome::NotFound`] if an endpoint evaluates to NaN or if
/// `f(a) * f(b) >= 0` (no sign change). Otherwise halves the bracket while
/// its width exceeds `epsilon`, keeping the half that preserves the sign
/// change; when both halves report the same sign the left bound moves. An
/// exact zero at a midpoint returns immediately.
///
/// A non-positive or non-finite `epsilon` is replaced by the default
/// [`Tolerance`], preserving termination.
#[allow(clippy::float_cmp)]
pub fn solve<F, Obs>(f: &F, bracket: [f64; 2], epsilon: f64, mut observer: Obs) -> Outcome
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let epsilon = Tolerance::clamp_epsilon(epsilon);
    let [mut a, mut b] = bracket;

    let mut fa = f.eval(a);
    let fb = f.eval(b);
    if fa.is_nan() || fb.is_nan() {
        return Outcome::NotFound;
    }
    if fa * fb >= 0.0 {
        return Outcome::NotFound;
    }

    let mut mid = 0.5 * (a + b);
    let mut iter = 0;
    while (b - a).abs() > epsilon {
        iter += 1;
        mid = 0.5 * (a + b);
        let fm = f.eval(mid);

        let event = Event {
            iter,
            bracket: [a, b],
            x: mid,
            fx: fm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Outcome::Exhausted(mid);
        }

        if fm == 0.0 {
            return Outcome::Found(mid);
        }
        if fa * fm < 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = fm;
        }
    }

    Outcome::Found(mid)
}

/// Runs bisection without observation.
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], epsilon: f64) -> Outcome
where
    F: Function,
{
    solve(f, bracket, epsilon, ())
}
