use super::{Flavor, Formatter, ToSql};

/// An identifier, quoted only when it is not a plain `[A-Za-z_][A-Za-z0-9_]*`
/// name or when it collides with a reserved word.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        if is_plain(name) {
            f.dst.push_str(name);
            return;
        }

        let (open, close) = match f.serializer.flavor {
            Flavor::SqlServer | Flavor::SqlServer2008 => ('[', ']'),
            _ => ('"', '"'),
        };

        f.dst.push(open);
        for c in name.chars() {
            if c == close {
                f.dst.push(close);
            }
            f.dst.push(c);
        }
        f.dst.push(close);
    }
}

fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !is_reserved(name)
}

/// Words reserved by at least one supported dialect.
const RESERVED: &[&str] = &[
    "ALL", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CREATE", "CROSS", "CURRENT", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
    "ELSE", "END", "EXISTS", "FETCH", "FOR", "FOREIGN", "FROM", "FULL", "GROUP",
    "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT",
    "LIKE", "LEVEL", "NOT", "NULL", "OF", "OFFSET", "ON", "OR", "ORDER", "OUTER",
    "OVER", "PRIMARY", "REFERENCES", "RIGHT", "ROW", "ROWS", "SELECT", "SET", "SOME",
    "TABLE", "THEN", "TO", "UNION", "UNIQUE", "UPDATE", "USER", "VALUES", "VIEW",
    "WHEN", "WHERE", "WITH",
];

fn is_reserved(name: &str) -> bool {
    RESERVED.iter().any(|word| word.eq_ignore_ascii_case(name))
}
