//! Root finding by tangent-line iteration (Newton–Raphson).
//!
//! Newton's method iterates `x ← x − f(x)/f′(x)` from the left end of the
//! bracket until the step size drops below epsilon or the iteration cap is
//! reached. The derivative is supplied by the caller; for textual
//! expressions, [`crate::newton`](crate::newton()) differentiates
//! symbolically and surfaces failure as an error before iteration starts.
//!
//! # Bracket check
//!
//! The precondition test is `f(a) * f(b) > 0` — strict, so an exact zero at
//! an endpoint is accepted as a bracket. This is deliberately asymmetric
//! with [`crate::bisection`], which rejects zero endpoints with `>=`.
//!
//! # Division by zero
//!
//! A vanishing derivative is not trapped. The resulting ±∞ or NaN
//! propagates through subsequent iterates, the NaN step-size comparison
//! reads false, and the loop exits on its own; the solver then reports
//! [`Outcome::NotFound`]. A test pins this termination path down because
//! it depends on IEEE comparison semantics.

use crate::{Function, Observer, Outcome, Tolerance};

/// Iteration cap used by the expression entry point.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Control actions supported by the Newton solver.
pub enum Action {
    /// Stop the solver early, reporting the current iterate as
    /// [`Outcome::Exhausted`].
    StopEarly,
}

/// Iteration event emitted once per Newton step.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The updated iterate.
    pub x: f64,
    /// Function value at the previous iterate.
    pub fx: f64,
    /// Derivative value at the previous iterate.
    pub dfx: f64,
}

/// Finds a root of `f` on the bracket by Newton's method.
///
/// `df` must be the first derivative of `f`. Iteration starts from the
/// first bracket endpoint, so callers should put the better initial guess
/// first; a starting point with `f′ = 0` diverges immediately.
///
/// Returns [`Outcome::NotFound`] if an endpoint evaluates to NaN, if the
/// endpoints fail the (strict) bracket check, or if the final iterate is
/// non-finite. Returns [`Outcome::Exhausted`] with the last iterate when
/// `max_iters` runs out before the step size reaches `epsilon`.
///
/// A non-positive or non-finite `epsilon` is replaced by the default
/// [`Tolerance`], and a zero `max_iters` falls back to
/// [`DEFAULT_MAX_ITERS`].
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    bracket: [f64; 2],
    epsilon: f64,
    max_iters: usize,
    mut observer: Obs,
) -> Outcome
where
    F: Function,
    D: Function,
    Obs: Observer<Event, Action>,
{
    let epsilon = Tolerance::clamp_epsilon(epsilon);
    let max_iters = if max_iters == 0 {
        DEFAULT_MAX_ITERS
    } else {
        max_iters
    };
    let [a, b] = bracket;

    let fa = f.eval(a);
    let fb = f.eval(b);
    if fa.is_nan() || fb.is_nan() {
        return Outcome::NotFound;
    }
    if fa * fb > 0.0 {
        return Outcome::NotFound;
    }

    let mut x_prev = b;
    let mut x_curr = a;
    let mut iters = 0;
    while (x_curr - x_prev).abs() > epsilon && iters < max_iters {
        x_prev = x_curr;
        let fx = f.eval(x_prev);
        let dfx = df.eval(x_prev);
        x_curr = x_prev - fx / dfx;
        iters += 1;

        let event = Event {
            iter: iters,
            x: x_curr,
            fx,
            dfx,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Outcome::Exhausted(x_curr);
        }
    }

    if !x_curr.is_finite() {
        return Outcome::NotFound;
    }
    if iters == max_iters && (x_curr - x_prev).abs() > epsilon {
        return Outcome::Exhausted(x_curr);
    }
    Outcome::Found(x_curr)
}

/// Runs Newton's method without observation.
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    bracket: [f64; 2],
    epsilon: f64,
    max_iters: usize,
) -> Outcome
where
    F: Function,
    D: Function,
{
    solve(f, df, bracket, epsilon, max_iters, ())
}
