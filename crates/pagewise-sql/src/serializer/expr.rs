use super::{Comma, Delimited, Formatter, Ident, Period, ToSql};

use crate::stmt;

/// An operand of `AND` / `OR` / `NOT`. Nested boolean connectives are
/// parenthesized so precedence survives rendering.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " AND "));
            }
            BinaryOp(expr) => match (&expr.op, &*expr.rhs) {
                (stmt::BinaryOp::Eq, rhs) if rhs.is_value_null() => {
                    fmt!(f, &*expr.lhs " IS NULL");
                }
                (stmt::BinaryOp::Ne, rhs) if rhs.is_value_null() => {
                    fmt!(f, &*expr.lhs " IS NOT NULL");
                }
                _ => {
                    let (lhs, op, rhs) = (&*expr.lhs, &expr.op, &*expr.rhs);
                    fmt!(f, lhs " " op " " rhs);
                }
            },
            Column(expr) => {
                let parts = Period(expr.table.iter().chain([&expr.name]).map(Ident));
                fmt!(f, parts);
            }
            Func(stmt::ExprFunc::Count { arg, distinct }) => {
                let distinct = if *distinct { "DISTINCT " } else { "" };

                match arg {
                    None => fmt!(f, "COUNT(*)"),
                    Some(arg) => {
                        let arg: &stmt::Expr = arg;
                        fmt!(f, "COUNT(" distinct arg ")")
                    }
                }
            }
            Func(stmt::ExprFunc::Call { name, args }) => {
                fmt!(f, name "(" Comma(args) ")");
            }
            // `x IN ()` is not valid SQL; an empty list never matches.
            InList(expr) if expr.list.is_empty() => fmt!(f, "1 = 0"),
            InList(expr) => {
                fmt!(f, &*expr.expr " IN (" Comma(&expr.list) ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, &*expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, &*expr.expr " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT " Operand(&expr.expr));
            }
            Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " OR "));
            }
            Star => fmt!(f, "*"),
            Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            stmt::Expr::And(_) | stmt::Expr::Or(_) => fmt!(f, "(" self.0 ")"),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
            stmt::BinaryOp::Like => "LIKE",
        })
    }
}
