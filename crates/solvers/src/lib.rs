//! Root and extremum finding for functions of one variable.
//!
//! Three solvers are provided, each in its own module with an observable
//! core and an expression-level entry point:
//!
//! - [`bisection`] — bracketing root finder, guaranteed to terminate.
//! - [`golden_section`](mod@golden_section) — unimodal minimum/maximum search.
//! - [`newton`](mod@newton) — tangent-line root finder with a symbolic
//!   derivative.
//!
//! The cores operate on anything implementing [`Function`] (closures
//! qualify) and report iteration progress to an [`Observer`]. The entry
//! points [`bisect`], [`golden_section()`], and [`newton()`] accept the
//! function as text, parsed and differentiated by [`nadir_expr`].
//!
//! ```
//! use nadir_solvers::bisect;
//!
//! let outcome = bisect("x^2 - 2", 0.0, 2.0, 1e-6)?;
//! let root = outcome.root().expect("sign change on [0, 2]");
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-6);
//! # Ok::<(), nadir_solvers::Error>(())
//! ```

pub mod bisection;
pub mod golden_section;
pub mod newton;

mod api;
mod function;
mod observe;
mod outcome;
mod tolerance;

pub use api::{Error, bisect, golden_section, newton};
pub use function::Function;
pub use observe::Observer;
pub use outcome::Outcome;
pub use tolerance::Tolerance;
