use pagewise_core::{stmt::Query, Error, Result};

/// Rejects a row window over a query with no ORDER BY.
///
/// Which rows fall inside a window is only defined for an ordered result.
pub fn validate(query: &Query) -> Result<()> {
    let window = query.window();

    if window.has_window && !window.has_order_by {
        return Err(Error::order_required_for_paging(
            query.first_row,
            query.max_rows,
        ));
    }

    Ok(())
}
