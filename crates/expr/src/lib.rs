//! Symbolic expressions in one free variable `x`.
//!
//! This crate provides the function-evaluation backend for the `nadir`
//! solvers:
//!
//! - [`parse`] — turns a textual formula like `"x^2 - 2"` into an [`Expr`]
//! - [`Expr::eval`] — evaluates the expression at a point, reporting domain
//!   errors as NaN rather than panicking
//! - [`Expr::derivative`] — produces the symbolic first derivative
//!
//! # Example
//!
//! ```
//! use nadir_expr::parse;
//!
//! let f = parse("x^2 - 2").unwrap();
//! assert_eq!(f.eval(2.0), 2.0);
//!
//! let df = f.derivative().unwrap();
//! assert_eq!(df.to_string(), "2 * x");
//! ```

mod ast;
mod deriv;
mod parse;
mod simplify;

pub use ast::{Expr, UnaryFn};
pub use deriv::DerivativeError;
pub use parse::{ParseError, parse};
