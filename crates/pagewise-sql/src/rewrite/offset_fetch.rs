use crate::Serializer;

use pagewise_core::stmt::{Query, Window};

/// Appends `OFFSET n ROWS FETCH NEXT m ROWS ONLY` to the default rendering,
/// which already ends with the query's ORDER BY.
pub(super) fn rewrite(serializer: &Serializer, query: &Query, window: &Window) -> String {
    use std::fmt::Write;

    let mut sql = serializer.serialize(query);

    // `first_row` is one-based, OFFSET counts skipped rows.
    let offset = window.offset();
    let limit = window.max_rows;

    tracing::debug!(
        dialect = serializer.dialect_name(),
        offset,
        limit,
        "paginating with OFFSET / FETCH"
    );

    // Writing to a `String` cannot fail.
    let _ = write!(sql, " OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY");
    sql
}
