#[macro_use]
mod fmt;
use fmt::{Sep, ToSql};

mod clauses;
pub use clauses::Clauses;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::rewrite::Pagination;

use pagewise_core::{stmt::Query, Capability};

/// Serialize a query to a SQL string
#[derive(Debug, Clone)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// How row windows are rendered. Fixed when the serializer is created.
    pagination: Pagination,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Which clauses of a query are written
    clauses: Clauses,
}

impl Serializer {
    fn new(flavor: Flavor) -> Serializer {
        Serializer {
            flavor,
            pagination: Pagination::for_capability(&flavor.capability()),
        }
    }

    /// Renders the full statement in its default, non-paginated form. Any row
    /// window on the query is ignored.
    pub fn serialize(&self, query: &Query) -> String {
        self.serialize_with(query, Clauses::ALL)
    }

    /// Renders the statement with only the given clauses.
    pub fn serialize_with(&self, query: &Query, clauses: Clauses) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            clauses,
        };

        query.to_sql(&mut fmt);
        ret
    }

    /// Renders the select clause on its own, e.g. `SELECT a, b`.
    pub fn select_clause(&self, query: &Query) -> String {
        self.fragment(|f| statement::SelectClause(query).to_sql(f))
    }

    /// Renders the order-by clause on its own, e.g. `ORDER BY a DESC`. Empty
    /// when the query has no ordering.
    pub fn order_by_clause(&self, query: &Query) -> String {
        self.fragment(|f| statement::OrderByClause(query).to_sql(f))
    }

    /// The pagination features of the target dialect.
    pub fn capability(&self) -> Capability {
        self.flavor.capability()
    }

    pub fn supports_first_row(&self) -> bool {
        self.capability().supports_first_row()
    }

    pub fn supports_max_rows(&self) -> bool {
        self.capability().supports_max_rows()
    }

    /// The pagination strategy chosen for the target dialect.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Name of the target dialect.
    pub fn dialect_name(&self) -> &'static str {
        self.flavor.name()
    }

    fn fragment(&self, render: impl FnOnce(&mut Formatter<'_>)) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            clauses: Clauses::ALL,
        };

        render(&mut fmt);
        ret
    }

    fn is_sql_server(&self) -> bool {
        matches!(self.flavor, Flavor::SqlServer | Flavor::SqlServer2008)
    }

    /// SQL Server and Oracle (before 23c) have no `TRUE` / `FALSE` literals.
    fn has_bool_literals(&self) -> bool {
        !self.is_sql_server() && !matches!(self.flavor, Flavor::Oracle)
    }
}
