use super::*;

/// A dialect-neutral `SELECT` query, optionally restricted to a row window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// The select list. Rendering order follows the vector order.
    pub select: Vec<SelectItem>,

    /// `SELECT DISTINCT`
    pub distinct: bool,

    /// FROM
    pub from: Vec<TableWithJoins>,

    /// WHERE
    pub filter: Option<Expr>,

    /// GROUP BY
    pub group_by: Vec<Expr>,

    /// HAVING
    pub having: Option<Expr>,

    /// ORDER BY. `None` and an empty list both mean "no ordering".
    pub order_by: Option<OrderBy>,

    /// One-based index of the first row to return.
    pub first_row: Option<u32>,

    /// Maximum number of rows to return.
    pub max_rows: Option<u32>,
}

#[derive(Debug, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl Query {
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Returns the row window this query requests.
    pub fn window(&self) -> Window {
        Window::new(self)
    }

    pub fn has_order_by(&self) -> bool {
        self.order_by.as_ref().is_some_and(|order_by| !order_by.is_empty())
    }

    pub fn has_window(&self) -> bool {
        self.first_row.is_some() || self.max_rows.is_some()
    }
}

impl QueryBuilder {
    pub fn select(mut self, expr: impl Into<Expr>) -> Self {
        self.query.select.push(SelectItem::from(expr.into()));
        self
    }

    pub fn select_as(mut self, expr: impl Into<Expr>, alias: impl Into<String>) -> Self {
        self.query.select.push(SelectItem::aliased(expr, alias));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.query.distinct = true;
        self
    }

    pub fn from(mut self, table: impl Into<TableWithJoins>) -> Self {
        self.query.from.push(table.into());
        self
    }

    /// Joins `table` onto the most recently added `FROM` entry.
    ///
    /// # Panics
    ///
    /// Panics if no `FROM` entry has been added yet.
    #[track_caller]
    pub fn join(mut self, kind: JoinKind, table: impl Into<TableRef>, on: impl Into<Expr>) -> Self {
        let Some(from) = self.query.from.last_mut() else {
            panic!("`join` called before `from`");
        };

        from.joins.push(Join {
            kind,
            table: table.into(),
            constraint: on.into(),
        });
        self
    }

    /// Adds a filter, ANDing it with any existing one.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.query.filter = Some(match self.query.filter.take() {
            Some(existing) => Expr::and(existing, expr),
            None => expr.into(),
        });
        self
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Self {
        self.query.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, expr: impl Into<Expr>) -> Self {
        self.query.having = Some(match self.query.having.take() {
            Some(existing) => Expr::and(existing, expr),
            None => expr.into(),
        });
        self
    }

    pub fn order_by(mut self, expr: impl Into<OrderByExpr>) -> Self {
        self.query
            .order_by
            .get_or_insert_with(OrderBy::default)
            .exprs
            .push(expr.into());
        self
    }

    pub fn first_row(mut self, first_row: u32) -> Self {
        self.query.first_row = Some(first_row);
        self
    }

    pub fn max_rows(mut self, max_rows: u32) -> Self {
        self.query.max_rows = Some(max_rows);
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}
