use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum ExprFunc {
    /// `COUNT(*)` when `arg` is `None`, otherwise `COUNT([DISTINCT] arg)`
    Count {
        arg: Option<Box<Expr>>,
        distinct: bool,
    },

    /// Any other function, rendered as `NAME(arg, ...)`
    Call { name: String, args: Vec<Expr> },
}

impl Expr {
    pub fn count_star() -> Self {
        ExprFunc::Count {
            arg: None,
            distinct: false,
        }
        .into()
    }

    pub fn count(arg: impl Into<Self>) -> Self {
        ExprFunc::Count {
            arg: Some(Box::new(arg.into())),
            distinct: false,
        }
        .into()
    }

    pub fn count_distinct(arg: impl Into<Self>) -> Self {
        ExprFunc::Count {
            arg: Some(Box::new(arg.into())),
            distinct: true,
        }
        .into()
    }

    pub fn func<I>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        ExprFunc::Call {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
