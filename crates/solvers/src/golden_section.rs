//! Extremum finding by golden-ratio interval narrowing.
//!
//! Golden section search locates the minimum (or maximum) of a function
//! assumed to be unimodal on the bracket. Two interior probes positioned by
//! the inverse golden ratio divide the interval; each iteration discards
//! the side whose probe is worse, reuses the surviving probe, and evaluates
//! exactly one new point.
//!
//! Unimodality is not validated, and a probe that evaluates to NaN is not
//! trapped: NaN comparisons are false, so the search still terminates but
//! the reported point is unreliable. There is no found/not-found
//! distinction — the midpoint of the final bracket is always returned.

use crate::{Function, Observer, Tolerance};

/// The inverse golden ratio, (√5 − 1) / 2.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Control actions supported by the golden section solver.
pub enum Action {
    /// Stop the solver early, returning the current bracket midpoint.
    StopEarly,
}

/// An interior probe with its objective value.
///
/// Values are reported after the minimize/maximize transform, so under
/// [`maximize`] they are the negated function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The probe position.
    pub x: f64,
    /// The transformed objective at the probe.
    pub value: f64,
}

/// Iteration event emitted once per bracket comparison.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket at the start of the iteration.
    pub bracket: [f64; 2],
    /// The two interior probes, left then right.
    pub probes: [Point; 2],
}

/// Finds the minimum of `f` on the bracket.
pub fn minimize<F, Obs>(f: &F, bracket: [f64; 2], epsilon: f64, observer: Obs) -> f64
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, epsilon, observer, |v| v)
}

/// Finds the minimum of `f` without observation.
pub fn minimize_unobserved<F>(f: &F, bracket: [f64; 2], epsilon: f64) -> f64
where
    F: Function,
{
    minimize(f, bracket, epsilon, ())
}

/// Finds the maximum of `f` on the bracket.
///
/// Implemented by minimizing the negated objective, so the same narrowing
/// loop serves both directions.
pub fn maximize<F, Obs>(f: &F, bracket: [f64; 2], epsilon: f64, observer: Obs) -> f64
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    search(f, bracket, epsilon, observer, |v| -v)
}

/// Finds the maximum of `f` without observation.
pub fn maximize_unobserved<F>(f: &F, bracket: [f64; 2], epsilon: f64) -> f64
where
    F: Function,
{
    maximize(f, bracket, epsilon, ())
}

/// Core golden section loop.
///
/// The transform is applied to objective values before comparison:
/// identity to minimize, negation to maximize.
fn search<F, Obs, T>(f: &F, bracket: [f64; 2], epsilon: f64, mut observer: Obs, transform: T) -> f64
where
    F: Function,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let epsilon = Tolerance::clamp_epsilon(epsilon);
    let [a, b] = bracket;
    let (mut left, mut right) = if a <= b { (a, b) } else { (b, a) };

    let mut x1 = right - INV_PHI * (right - left);
    let mut x2 = left + INV_PHI * (right - left);
    let mut f1 = transform(f.eval(x1));
    let mut f2 = transform(f.eval(x2));

    let mut iter = 0;
    while (right - left).abs() > epsilon {
        iter += 1;
        let event = Event {
            iter,
            bracket: [left, right],
            probes: [
                Point { x: x1, value: f1 },
                Point { x: x2, value: f2 },
            ],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break;
        }

        if f1 < f2 {
            // Minimum lies left of x2: drop the right side, reuse x1.
            right = x2;
            x2 = x1;
            f2 = f1;
            x1 = right - INV_PHI * (right - left);
            f1 = transform(f.eval(x1));
        } else {
            left = x1;
            x1 = x2;
            f1 = f2;
            x2 = left + INV_PHI * (right - left);
            f2 = transform(f.eval(x2));
        }
    }

    0.5 * (left + right)
}
