use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;
        use stmt::Value::*;

        match self {
            Null => fmt!(f, "NULL"),
            Bool(value) if !f.serializer.has_bool_literals() => {
                fmt!(f, if *value { "1" } else { "0" })
            }
            Bool(value) => fmt!(f, if *value { "TRUE" } else { "FALSE" }),
            I64(value) => {
                let _ = write!(f.dst, "{value}");
            }
            F64(value) if value.is_finite() => {
                let _ = write!(f.dst, "{value:?}");
            }
            // NaN and infinities have no SQL literal form
            F64(_) => fmt!(f, "NULL"),
            String(value) => {
                // Non-ASCII text needs a national string literal to survive
                // SQL Server's code page conversion.
                if f.serializer.is_sql_server() && !value.is_ascii() {
                    f.dst.push('N');
                }

                f.dst.push('\'');
                for c in value.chars() {
                    if c == '\'' {
                        f.dst.push('\'');
                    }
                    f.dst.push(c);
                }
                f.dst.push('\'');
            }
        }
    }
}
