use std::fmt;
use std::ops;

/// A symbolic expression tree in one free variable `x`.
///
/// Expressions are immutable once built. Evaluation is total: points where
/// the mathematical function is undefined yield NaN, never a panic, so
/// callers can test `is_nan` uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Num(f64),
    /// The free variable `x`.
    Var,
    /// Unary negation.
    Neg(Box<Expr>),
    /// Addition.
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction.
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication.
    Mul(Box<Expr>, Box<Expr>),
    /// Division.
    Div(Box<Expr>, Box<Expr>),
    /// Exponentiation, right-associative.
    Pow(Box<Expr>, Box<Expr>),
    /// Application of a built-in unary function.
    Fun(UnaryFn, Box<Expr>),
}

/// The built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Cot,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
}

impl UnaryFn {
    /// Returns the canonical source name of the function.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Cot => "cot",
            UnaryFn::Exp => "exp",
            UnaryFn::Ln => "ln",
            UnaryFn::Log10 => "log",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Abs => "abs",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => UnaryFn::Sin,
            "cos" => UnaryFn::Cos,
            "tan" => UnaryFn::Tan,
            "cot" => UnaryFn::Cot,
            "exp" => UnaryFn::Exp,
            "ln" => UnaryFn::Ln,
            "log" | "log10" => UnaryFn::Log10,
            "sqrt" => UnaryFn::Sqrt,
            "abs" => UnaryFn::Abs,
            _ => return None,
        })
    }

    /// Applies the function to a value.
    ///
    /// Domain errors follow IEEE semantics and surface as NaN. `cot` is
    /// computed as `cos/sin` with a zero denominator mapped to NaN.
    #[must_use]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            UnaryFn::Sin => v.sin(),
            UnaryFn::Cos => v.cos(),
            UnaryFn::Tan => v.tan(),
            UnaryFn::Cot => {
                let s = v.sin();
                if s == 0.0 { f64::NAN } else { v.cos() / s }
            }
            UnaryFn::Exp => v.exp(),
            UnaryFn::Ln => v.ln(),
            UnaryFn::Log10 => v.log10(),
            UnaryFn::Sqrt => v.sqrt(),
            UnaryFn::Abs => v.abs(),
        }
    }

    /// Applies the function to an expression, building a new tree.
    #[must_use]
    pub fn of(self, arg: Expr) -> Expr {
        Expr::Fun(self, Box::new(arg))
    }
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Division by exact zero returns NaN rather than ±∞ so that every
    /// undefined point reports the same signal. Logarithms of non-positive
    /// values, square roots of negatives, and fractional powers of negative
    /// bases are NaN via IEEE semantics.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Var => x,
            Expr::Neg(e) => -e.eval(x),
            Expr::Add(a, b) => a.eval(x) + b.eval(x),
            Expr::Sub(a, b) => a.eval(x) - b.eval(x),
            Expr::Mul(a, b) => a.eval(x) * b.eval(x),
            Expr::Div(a, b) => {
                let denom = b.eval(x);
                if denom == 0.0 {
                    f64::NAN
                } else {
                    a.eval(x) / denom
                }
            }
            Expr::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Expr::Fun(fun, e) => fun.apply(e.eval(x)),
        }
    }

    /// Returns true if the expression contains no occurrence of `x`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Num(_) => true,
            Expr::Var => false,
            Expr::Neg(e) | Expr::Fun(_, e) => e.is_constant(),
            Expr::Add(a, b)
            | Expr::Sub(a, b)
            | Expr::Mul(a, b)
            | Expr::Div(a, b)
            | Expr::Pow(a, b) => a.is_constant() && b.is_constant(),
        }
    }

    /// Raises the expression to a power.
    #[must_use]
    pub fn pow(self, exp: Expr) -> Expr {
        Expr::Pow(Box::new(self), Box::new(exp))
    }

    /// Binding strength used by [`fmt::Display`] to decide parenthesization.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            // A negative literal prints with a leading minus sign.
            Expr::Num(n) if *n < 0.0 => 3,
            Expr::Neg(_) => 3,
            Expr::Pow(..) => 4,
            Expr::Num(_) | Expr::Var | Expr::Fun(..) => 5,
        }
    }

    /// Writes the expression, parenthesizing whenever its precedence falls
    /// below `min`.
    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        let wrap = self.precedence() < min;
        if wrap {
            write!(f, "(")?;
        }
        match self {
            Expr::Num(n) => write!(f, "{n}")?,
            Expr::Var => write!(f, "x")?,
            Expr::Neg(e) => {
                write!(f, "-")?;
                e.fmt_prec(f, 4)?;
            }
            Expr::Add(a, b) => {
                a.fmt_prec(f, 1)?;
                write!(f, " + ")?;
                b.fmt_prec(f, 1)?;
            }
            Expr::Sub(a, b) => {
                a.fmt_prec(f, 1)?;
                write!(f, " - ")?;
                b.fmt_prec(f, 2)?;
            }
            Expr::Mul(a, b) => {
                a.fmt_prec(f, 2)?;
                write!(f, " * ")?;
                b.fmt_prec(f, 2)?;
            }
            Expr::Div(a, b) => {
                a.fmt_prec(f, 2)?;
                write!(f, " / ")?;
                b.fmt_prec(f, 3)?;
            }
            Expr::Pow(a, b) => {
                a.fmt_prec(f, 5)?;
                write!(f, "^")?;
                b.fmt_prec(f, 4)?;
            }
            Expr::Fun(fun, arg) => {
                write!(f, "{}(", fun.name())?;
                arg.fmt_prec(f, 0)?;
                write!(f, ")")?;
            }
        }
        if wrap {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_arithmetic() {
        // 2 * x + 1
        let e = Expr::Num(2.0) * Expr::Var + Expr::Num(1.0);
        assert_relative_eq!(e.eval(3.0), 7.0);
    }

    #[test]
    fn division_by_zero_is_nan() {
        let e = Expr::Num(1.0) / Expr::Var;
        assert!(e.eval(0.0).is_nan());
        assert_relative_eq!(e.eval(2.0), 0.5);
    }

    #[test]
    fn log_of_non_positive_is_nan() {
        let e = UnaryFn::Ln.of(Expr::Var);
        assert!(e.eval(-1.0).is_nan());
        assert!(e.eval(0.0).is_infinite() || e.eval(0.0).is_nan());
        assert_relative_eq!(e.eval(1.0), 0.0);
    }

    #[test]
    fn cot_at_zero_is_nan() {
        let e = UnaryFn::Cot.of(Expr::Var);
        assert!(e.eval(0.0).is_nan());
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        let e = UnaryFn::Sqrt.of(Expr::Var);
        assert!(e.eval(-4.0).is_nan());
    }

    #[test]
    fn constant_detection() {
        assert!((Expr::Num(2.0) * Expr::Num(3.0)).is_constant());
        assert!(!(Expr::Num(2.0) * Expr::Var).is_constant());
        assert!(!UnaryFn::Sin.of(Expr::Var).is_constant());
    }

    #[test]
    fn display_respects_precedence() {
        let e = (Expr::Var + Expr::Num(1.0)) * Expr::Num(2.0);
        assert_eq!(e.to_string(), "(x + 1) * 2");

        let e = Expr::Var - (Expr::Var - Expr::Num(1.0));
        assert_eq!(e.to_string(), "x - (x - 1)");

        let e = (-Expr::Var).pow(Expr::Num(2.0));
        assert_eq!(e.to_string(), "(-x)^2");

        let e = -Expr::Var.pow(Expr::Num(2.0));
        assert_eq!(e.to_string(), "-x^2");
    }

    #[test]
    fn display_nested_pow_is_right_associative() {
        let e = Expr::Var.pow(Expr::Num(2.0).pow(Expr::Num(3.0)));
        assert_eq!(e.to_string(), "x^2^3");

        let e = Expr::Var.pow(Expr::Num(2.0)).pow(Expr::Num(3.0));
        assert_eq!(e.to_string(), "(x^2)^3");
    }
}
