use thiserror::Error;

use crate::ast::{Expr, UnaryFn};

/// Errors that can occur during symbolic differentiation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeError {
    /// The expression contains a function with no symbolic derivative here.
    #[error("`{function}` has no symbolic derivative")]
    Unsupported { function: &'static str },
}

impl Expr {
    /// Computes the symbolic first derivative with respect to `x`.
    ///
    /// Applies the standard calculus rules: power, product, quotient, and
    /// chain. A power `f^g` with a non-constant exponent is differentiated
    /// via `f^g * (g' * ln(f) + g * f'/f)`. The result is cleaned up by
    /// [`Expr::simplified`] so derivative text stays readable.
    ///
    /// # Errors
    ///
    /// Returns [`DerivativeError::Unsupported`] if the expression contains
    /// `abs`, which has no derivative at zero and is not differentiated here.
    pub fn derivative(&self) -> Result<Expr, DerivativeError> {
        Ok(self.diff()?.simplified())
    }

    fn diff(&self) -> Result<Expr, DerivativeError> {
        Ok(match self {
            Expr::Num(_) => Expr::Num(0.0),
            Expr::Var => Expr::Num(1.0),
            Expr::Neg(e) => -e.diff()?,
            Expr::Add(a, b) => a.diff()? + b.diff()?,
            Expr::Sub(a, b) => a.diff()? - b.diff()?,
            Expr::Mul(a, b) => {
                let (a, b) = (a.as_ref(), b.as_ref());
                a.diff()? * b.clone() + a.clone() * b.diff()?
            }
            Expr::Div(a, b) => {
                let (a, b) = (a.as_ref(), b.as_ref());
                (a.diff()? * b.clone() - a.clone() * b.diff()?) / (b.clone() * b.clone())
            }
            Expr::Pow(base, exp) => {
                let (base, exp) = (base.as_ref(), exp.as_ref());
                if exp.is_constant() {
                    exp.clone() * base.clone().pow(exp.clone() - Expr::Num(1.0)) * base.diff()?
                } else {
                    base.clone().pow(exp.clone())
                        * (exp.diff()? * UnaryFn::Ln.of(base.clone())
                            + exp.clone() * base.diff()? / base.clone())
                }
            }
            Expr::Fun(fun, arg) => {
                let inner = arg.diff()?;
                let u = arg.as_ref().clone();
                let outer = match fun {
                    UnaryFn::Sin => UnaryFn::Cos.of(u),
                    UnaryFn::Cos => -UnaryFn::Sin.of(u),
                    UnaryFn::Tan => Expr::Num(1.0) / UnaryFn::Cos.of(u).pow(Expr::Num(2.0)),
                    UnaryFn::Cot => -(Expr::Num(1.0) / UnaryFn::Sin.of(u).pow(Expr::Num(2.0))),
                    UnaryFn::Exp => UnaryFn::Exp.of(u),
                    UnaryFn::Ln => Expr::Num(1.0) / u,
                    UnaryFn::Log10 => Expr::Num(1.0) / (u * Expr::Num(std::f64::consts::LN_10)),
                    UnaryFn::Sqrt => Expr::Num(1.0) / (Expr::Num(2.0) * UnaryFn::Sqrt.of(u)),
                    UnaryFn::Abs => {
                        return Err(DerivativeError::Unsupported {
                            function: UnaryFn::Abs.name(),
                        });
                    }
                };
                outer * inner
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::parse;

    fn derivative(src: &str) -> Expr {
        parse(src)
            .expect("should parse")
            .derivative()
            .expect("should differentiate")
    }

    #[test]
    fn power_rule() {
        assert_eq!(derivative("x^2").to_string(), "2 * x");
        assert_eq!(derivative("x^3").to_string(), "3 * x^2");
    }

    #[test]
    fn constants_vanish() {
        assert_eq!(derivative("42").to_string(), "0");
        assert_eq!(derivative("pi").to_string(), "0");
        assert_eq!(derivative("x + 1").to_string(), "1");
    }

    #[test]
    fn trig_rules() {
        assert_eq!(derivative("sin(x)").to_string(), "cos(x)");
        assert_eq!(derivative("cos(x)").to_string(), "-sin(x)");

        let d = derivative("tan(x)");
        assert_relative_eq!(d.eval(0.5), 1.0 / 0.5_f64.cos().powi(2), epsilon = 1e-12);
    }

    #[test]
    fn log_and_exp_rules() {
        assert_eq!(derivative("ln(x)").to_string(), "1 / x");
        assert_eq!(derivative("exp(x)").to_string(), "exp(x)");

        let d = derivative("log(x)");
        assert_relative_eq!(d.eval(10.0), 1.0 / (10.0 * 10.0_f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn chain_rule() {
        let d = derivative("sin(x^2)");
        let x = 1.3;
        assert_relative_eq!(d.eval(x), (x * x).cos() * 2.0 * x, epsilon = 1e-12);
    }

    #[test]
    fn product_and_quotient_rules() {
        let d = derivative("x * sin(x)");
        let x = 0.7;
        assert_relative_eq!(d.eval(x), x.sin() + x * x.cos(), epsilon = 1e-12);

        let d = derivative("sin(x) / x");
        assert_relative_eq!(
            d.eval(x),
            (x * x.cos() - x.sin()) / (x * x),
            epsilon = 1e-12
        );
    }

    #[test]
    fn general_power_rule() {
        // d/dx x^x = x^x * (ln(x) + 1)
        let d = derivative("x^x");
        let x = 2.0;
        assert_relative_eq!(d.eval(x), 4.0 * (x.ln() + 1.0), epsilon = 1e-12);
    }

    #[test]
    fn sqrt_rule() {
        let d = derivative("sqrt(x)");
        assert_relative_eq!(d.eval(4.0), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn abs_is_not_differentiable() {
        let err = parse("abs(x)").expect("should parse").derivative();
        assert_eq!(err, Err(DerivativeError::Unsupported { function: "abs" }));

        // The failure surfaces from anywhere in the tree.
        let err = parse("x^2 + abs(x - 1)").expect("should parse").derivative();
        assert!(err.is_err());
    }
}
