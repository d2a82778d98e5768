//! Row-window pagination for dialects without `LIMIT / OFFSET`.
//!
//! Every rewrite runs the same way: the guard rejects windows over unordered
//! queries, queries without a window come back exactly as the default
//! serialization, and windowed queries are handed to the strategy the
//! [`Serializer`] was configured with.

mod guard;
pub use guard::validate;

mod offset_fetch;
mod row_number;

use crate::Serializer;

use pagewise_core::{stmt::Query, Capability, Result};

/// How a dialect applies a row window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// The window is not rendered. Callers skip and truncate rows themselves.
    None,

    /// `... ORDER BY ... OFFSET n ROWS FETCH NEXT m ROWS ONLY`
    OffsetFetch,

    /// `;WITH QR AS (SELECT ..., ROW_NUMBER() OVER(ORDER BY ...) AS RowNum ...)
    /// SELECT * FROM QR WHERE RowNum BETWEEN a AND b`
    RowNumber,
}

impl Pagination {
    /// Picks the strategy for a dialect, preferring native syntax.
    pub fn for_capability(capability: &Capability) -> Pagination {
        if !capability.first_row && !capability.max_rows {
            Pagination::None
        } else if capability.offset_fetch {
            Pagination::OffsetFetch
        } else if capability.row_number {
            Pagination::RowNumber
        } else {
            Pagination::None
        }
    }
}

impl Serializer {
    /// Renders `query` for the target dialect, applying its row window.
    ///
    /// Fails when a row window is requested without an ordering, whatever the
    /// strategy.
    pub fn rewrite(&self, query: &Query) -> Result<String> {
        validate(query)?;

        let window = query.window();

        if !window.has_window {
            tracing::trace!(dialect = self.dialect_name(), "no row window; using default rendering");
            return Ok(self.serialize(query));
        }

        if window.is_empty() {
            tracing::warn!(
                dialect = self.dialect_name(),
                first_row = window.first_row,
                "row window with max_rows=0 selects no rows"
            );
        }

        match self.pagination() {
            Pagination::None => {
                tracing::debug!(
                    dialect = self.dialect_name(),
                    "dialect cannot paginate; row window left to the caller"
                );
                Ok(self.serialize(query))
            }
            Pagination::OffsetFetch => Ok(offset_fetch::rewrite(self, query, &window)),
            Pagination::RowNumber => row_number::rewrite(self, query, &window),
        }
    }
}
