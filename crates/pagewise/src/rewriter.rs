use crate::{ClientPage, Dialect, Result};

use pagewise_core::{stmt::Query, Capability};
use pagewise_sql::{Pagination, Serializer};

/// Renders queries, row window included, for one target dialect.
///
/// The pagination strategy is fixed when the rewriter is created. A
/// `Rewriter` holds no per-call state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Rewriter {
    dialect: Dialect,
    serializer: Serializer,
}

impl Rewriter {
    pub fn new(dialect: Dialect) -> Rewriter {
        Rewriter {
            dialect,
            serializer: dialect.serializer(),
        }
    }

    /// Creates a rewriter for the dialect named by a connection URL or a bare
    /// dialect name.
    pub fn connect(url: &str) -> Result<Rewriter> {
        Ok(Rewriter::new(Dialect::parse(url)?))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn capability(&self) -> Capability {
        self.serializer.capability()
    }

    pub fn pagination(&self) -> Pagination {
        self.serializer.pagination()
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// Renders `query` for the target dialect.
    ///
    /// Fails with an order-required-for-paging error when the query requests
    /// a row window but has no ORDER BY.
    pub fn rewrite(&self, query: &Query) -> Result<String> {
        self.serializer.rewrite(query)
    }

    /// The part of the row window the database will not apply, if any.
    ///
    /// `Some` when the query has a row window the dialect cannot render; the
    /// caller then skips and truncates rows itself.
    pub fn client_page(&self, query: &Query) -> Option<ClientPage> {
        if !query.has_window() {
            return None;
        }

        let capability = self.capability();
        let page = ClientPage {
            skip: if capability.first_row {
                0
            } else {
                query.window().offset()
            },
            take: if capability.max_rows {
                None
            } else {
                query.max_rows
            },
        };

        if page.is_noop() {
            None
        } else {
            Some(page)
        }
    }
}
