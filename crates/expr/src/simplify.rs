use crate::ast::Expr;

impl Expr {
    /// Rewrites the expression bottom-up with constant folding and identity
    /// elimination: `0 + e`, `e - 0`, `1 * e`, `0 * e`, `e / 1`, `e^1`,
    /// `e^0`, and double negation.
    ///
    /// Note that `0 * e → 0` ignores the domain of `e`; this is applied to
    /// derivative output, not to user-supplied formulas.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn simplified(self) -> Expr {
        match self {
            Expr::Num(_) | Expr::Var => self,
            Expr::Neg(e) => match e.simplified() {
                Expr::Num(n) => Expr::Num(-n),
                Expr::Neg(inner) => *inner,
                e => -e,
            },
            Expr::Add(a, b) => match (a.simplified(), b.simplified()) {
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x + y),
                (Expr::Num(z), e) | (e, Expr::Num(z)) if z == 0.0 => e,
                (a, b) => a + b,
            },
            Expr::Sub(a, b) => match (a.simplified(), b.simplified()) {
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x - y),
                (e, Expr::Num(z)) if z == 0.0 => e,
                (Expr::Num(z), e) if z == 0.0 => (-e).simplified(),
                (a, b) => a - b,
            },
            Expr::Mul(a, b) => match (a.simplified(), b.simplified()) {
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x * y),
                (Expr::Num(z), _) | (_, Expr::Num(z)) if z == 0.0 => Expr::Num(0.0),
                (Expr::Num(one), e) | (e, Expr::Num(one)) if one == 1.0 => e,
                (a, b) => a * b,
            },
            Expr::Div(a, b) => match (a.simplified(), b.simplified()) {
                (Expr::Num(x), Expr::Num(y)) if y != 0.0 => Expr::Num(x / y),
                (e, Expr::Num(one)) if one == 1.0 => e,
                (a, b) => a / b,
            },
            Expr::Pow(a, b) => match (a.simplified(), b.simplified()) {
                (Expr::Num(x), Expr::Num(y)) => Expr::Num(x.powf(y)),
                (e, Expr::Num(one)) if one == 1.0 => e,
                (_, Expr::Num(z)) if z == 0.0 => Expr::Num(1.0),
                (a, b) => a.pow(b),
            },
            Expr::Fun(fun, arg) => Expr::Fun(fun, Box::new(arg.simplified())),
        }
    }
}
