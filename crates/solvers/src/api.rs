//! Expression-level entry points.
//!
//! These functions accept the function as text, parse it once, and run the
//! corresponding solver with the parsed expression adapted to a closure.
//! Parsing problems and unsupported derivatives surface as [`Error`]
//! before any iteration starts; everything that can go wrong numerically
//! is reported through the solver's [`Outcome`].

use nadir_expr::{DerivativeError, ParseError};

use crate::{Outcome, bisection, golden_section as golden_section_mod, newton as newton_mod};

/// An error preparing an expression for solving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression text could not be parsed.
    #[error("failed to parse expression")]
    Parse(#[from] ParseError),

    /// The expression could not be differentiated symbolically, so
    /// Newton's method is unavailable for it.
    #[error("expression cannot be differentiated")]
    Derivative(#[from] DerivativeError),
}

/// Finds a root of the expression on `[a, b]` by bisection.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the expression text is invalid.
pub fn bisect(expression: &str, a: f64, b: f64, epsilon: f64) -> Result<Outcome, Error> {
    let expr = nadir_expr::parse(expression)?;
    let f = |x: f64| expr.eval(x);
    Ok(bisection::solve_unobserved(&f, [a, b], epsilon))
}

/// Finds an extremum of the expression on `[a, b]` by golden section
/// search: the minimum by default, the maximum when `maximize` is set.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the expression text is invalid.
pub fn golden_section(
    expression: &str,
    a: f64,
    b: f64,
    epsilon: f64,
    maximize: bool,
) -> Result<f64, Error> {
    let expr = nadir_expr::parse(expression)?;
    let f = |x: f64| expr.eval(x);
    let x = if maximize {
        golden_section_mod::maximize_unobserved(&f, [a, b], epsilon)
    } else {
        golden_section_mod::minimize_unobserved(&f, [a, b], epsilon)
    };
    Ok(x)
}

/// Finds a root of the expression on `[a, b]` by Newton's method,
/// differentiating the expression symbolically.
///
/// Iteration starts from `a`, so put the better initial guess first.
/// Passing zero for `max_iterations` uses
/// [`newton::DEFAULT_MAX_ITERS`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if the expression text is invalid, or
/// [`Error::Derivative`] if the expression contains a function with no
/// symbolic derivative (such as `abs`).
pub fn newton(
    expression: &str,
    a: f64,
    b: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Result<Outcome, Error> {
    let expr = nadir_expr::parse(expression)?;
    let deriv = expr.derivative()?;
    let f = |x: f64| expr.eval(x);
    let df = |x: f64| deriv.eval(x);
    Ok(newton_mod::solve_unobserved(
        &f,
        &df,
        [a, b],
        epsilon,
        max_iterations,
    ))
}
