use super::Query;

/// The row window requested by a query, with defaults substituted.
///
/// Derived from a [`Query`] on every rewrite and never stored. It fully
/// determines which rewrite path runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// The query has at least one ORDER BY expression.
    pub has_order_by: bool,

    /// `first_row` or `max_rows` was set.
    pub has_window: bool,

    /// `first_row` as given by the caller, `0` when absent.
    pub first_row: u32,

    /// `max_rows` as given by the caller, [`Window::UNBOUNDED`] when absent.
    pub max_rows: u32,
}

impl Window {
    /// Stands in for "no limit" when `max_rows` is absent.
    pub const UNBOUNDED: u32 = u32::MAX;

    pub fn new(query: &Query) -> Window {
        Window {
            has_order_by: query.has_order_by(),
            has_window: query.has_window(),
            first_row: query.first_row.unwrap_or(0),
            max_rows: query.max_rows.unwrap_or(Window::UNBOUNDED),
        }
    }

    /// Zero-based number of rows to skip. `first_row` is one-based, so row 1
    /// skips nothing.
    pub fn offset(&self) -> u32 {
        self.first_row.saturating_sub(1)
    }

    /// Returns `true` when the window is guaranteed to select no rows.
    pub fn is_empty(&self) -> bool {
        self.has_window && self.max_rows == 0
    }
}
