/// A real-valued function of one real variable.
///
/// Implementations report points where the function is undefined by
/// returning NaN, never by panicking. Solvers rely on this to test
/// `is_nan` uniformly. Evaluation must be side-effect-free.
///
/// Closures implement `Function`, so parsed expressions and ad-hoc test
/// functions share one calling convention:
///
/// ```
/// use nadir_solvers::Function;
///
/// let f = |x: f64| x * x - 2.0;
/// assert_eq!(f.eval(2.0), 2.0);
///
/// let expr = nadir_expr::parse("x^2 - 2").unwrap();
/// let g = |x: f64| expr.eval(x);
/// assert_eq!(g.eval(2.0), 2.0);
/// ```
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation for plain closures.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closure_implements_function() {
        let f = |x: f64| 3.0 * x + 1.0;
        assert_relative_eq!(f.eval(2.0), 7.0);
    }

    #[test]
    fn parsed_expression_adapts_to_function() {
        let expr = nadir_expr::parse("x^2 - 2").expect("should parse");
        let f = |x: f64| expr.eval(x);
        assert_relative_eq!(Function::eval(&f, 3.0), 7.0);
    }

    #[test]
    fn undefined_points_report_nan() {
        let expr = nadir_expr::parse("ln(x)").expect("should parse");
        let f = |x: f64| expr.eval(x);
        assert!(f.eval(-1.0).is_nan());
    }
}
