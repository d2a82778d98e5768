use crate::{Clauses, Serializer};

use pagewise_core::{
    stmt::{Query, Window},
    Error, Result,
};

/// Emulates a row window by numbering rows inside a CTE and filtering on the
/// number outside of it.
///
/// The inner query is assembled from independently rendered parts: the select
/// clause, a `ROW_NUMBER()` column ordered by the query's ORDER BY, and the
/// rest of the statement rendered with [`Clauses::BODY`]. The ORDER BY itself
/// moves into the `OVER(...)` clause.
///
/// The `BETWEEN` bounds are the caller's `first_row` and `max_rows` as given.
/// They are not an offset and a count: `first_row = 5, max_rows = 10` selects
/// row numbers 5 through 10.
pub(super) fn rewrite(serializer: &Serializer, query: &Query, window: &Window) -> Result<String> {
    let select = serializer.select_clause(query);
    let order_by = serializer.order_by_clause(query);
    let body = serializer.serialize_with(query, Clauses::BODY);

    // The guard guarantees an ordering; an empty fragment here means the
    // serializer and the guard disagree.
    if order_by.is_empty() {
        return Err(Error::invalid_statement(
            "row-number pagination requires an ORDER BY clause",
        ));
    }

    tracing::debug!(
        dialect = serializer.dialect_name(),
        first_row = window.first_row,
        max_rows = window.max_rows,
        "paginating with ROW_NUMBER() common table expression"
    );

    let mut inner = format!("{select}, ROW_NUMBER() OVER({order_by}) AS RowNum");
    if !body.is_empty() {
        inner.push(' ');
        inner.push_str(&body);
    }

    Ok(format!(
        ";WITH QR AS ({inner}) SELECT * FROM QR WHERE RowNum BETWEEN {} AND {}",
        window.first_row, window.max_rows
    ))
}
