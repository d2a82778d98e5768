use super::Expr;

/// A column reference, e.g. `name` or `u.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    /// Table name or alias qualifying the column.
    pub table: Option<String>,

    /// Column name
    pub name: String,
}

impl Expr {
    /// References an unqualified column.
    pub fn column(name: impl Into<String>) -> Self {
        ExprColumn {
            table: None,
            name: name.into(),
        }
        .into()
    }

    /// References a column qualified by a table name or alias.
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        ExprColumn {
            table: Some(table.into()),
            name: name.into(),
        }
        .into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
