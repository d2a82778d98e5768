use super::Expr;

/// A table in the `FROM` clause, e.g. `users` or `users u`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Optional schema qualifying the table name.
    pub schema: Option<String>,

    pub name: String,

    pub alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,

    pub table: TableRef,

    /// The `ON` condition
    pub constraint: Expr,
}

/// A `FROM` entry: one table and the joins hanging off of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableWithJoins {
    pub relation: TableRef,
    pub joins: Vec<Join>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        TableRef::new(value)
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        TableRef::new(value)
    }
}

impl From<TableRef> for TableWithJoins {
    fn from(relation: TableRef) -> Self {
        Self {
            relation,
            joins: vec![],
        }
    }
}

impl From<&str> for TableWithJoins {
    fn from(value: &str) -> Self {
        TableRef::new(value).into()
    }
}
