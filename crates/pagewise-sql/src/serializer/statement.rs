use super::{Comma, Formatter, Ident, Period, Sep, ToSql};

use crate::stmt;

/// `SELECT [DISTINCT] item, ...`
pub(super) struct SelectClause<'a>(pub(super) &'a stmt::Query);

/// `ORDER BY expr [ASC|DESC], ...`, or nothing when the query is unordered.
pub(super) struct OrderByClause<'a>(pub(super) &'a stmt::Query);

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if f.clauses.select {
            fmt!(f, SelectClause(self));
        }

        if !self.from.is_empty() {
            fmt!(f, Sep "FROM " Comma(&self.from));
        }

        if let Some(filter) = &self.filter {
            fmt!(f, Sep "WHERE " filter);
        }

        if !self.group_by.is_empty() {
            fmt!(f, Sep "GROUP BY " Comma(&self.group_by));
        }

        if let Some(having) = &self.having {
            fmt!(f, Sep "HAVING " having);
        }

        if f.clauses.order_by && self.has_order_by() {
            fmt!(f, Sep OrderByClause(self));
        }
    }
}

impl ToSql for SelectClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let distinct = if self.0.distinct { "DISTINCT " } else { "" };

        if self.0.select.is_empty() {
            fmt!(f, "SELECT " distinct "*");
        } else {
            fmt!(f, "SELECT " distinct Comma(&self.0.select));
        }
    }
}

impl ToSql for OrderByClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(order_by) = self.0.order_by.as_ref().filter(|o| !o.is_empty()) {
            fmt!(f, "ORDER BY " Comma(&order_by.exprs));
        }
    }
}

impl ToSql for &stmt::SelectItem {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let alias = self.alias.as_ref().map(|alias| (" AS ", Ident(alias)));
        fmt!(f, &self.expr alias);
    }
}

impl ToSql for &stmt::TableWithJoins {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.relation);

        for join in &self.joins {
            fmt!(f, " " join);
        }
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Period(self.schema.iter().chain([&self.name]).map(Ident));
        // Oracle rejects `AS` before a table alias; every dialect accepts a
        // bare alias.
        let alias = self.alias.as_ref().map(|alias| (" ", Ident(alias)));

        fmt!(f, name alias);
    }
}

impl ToSql for &stmt::Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let kind = match self.kind {
            stmt::JoinKind::Inner => "INNER JOIN ",
            stmt::JoinKind::Left => "LEFT JOIN ",
            stmt::JoinKind::Right => "RIGHT JOIN ",
        };

        let table = &self.table;
        let constraint = &self.constraint;

        fmt!(f, kind table " ON " constraint);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(order) = &self.order {
            fmt!(f, &self.expr " " order);
        } else {
            fmt!(f, &self.expr);
        }
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}
