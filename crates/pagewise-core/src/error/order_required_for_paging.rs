use super::Error;

/// Error when a row window is requested on a query without an ORDER BY.
///
/// A row window (`first_row` and/or `max_rows`) only selects a well-defined
/// subset of rows when the result set has a deterministic order. The caller
/// must add an ordering and issue the request again.
#[derive(Debug)]
pub(super) struct OrderRequiredForPaging {
    first_row: Option<u32>,
    max_rows: Option<u32>,
}

impl std::error::Error for OrderRequiredForPaging {}

impl core::fmt::Display for OrderRequiredForPaging {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("an ORDER BY clause is required when paging with")?;

        match (self.first_row, self.max_rows) {
            (Some(first_row), Some(max_rows)) => {
                write!(f, " first_row={first_row} and max_rows={max_rows}")
            }
            (Some(first_row), None) => write!(f, " first_row={first_row}"),
            (None, Some(max_rows)) => write!(f, " max_rows={max_rows}"),
            (None, None) => f.write_str(" a row window"),
        }
    }
}

impl Error {
    /// Creates an error for a row window requested without an ordering.
    pub fn order_required_for_paging(first_row: Option<u32>, max_rows: Option<u32>) -> Error {
        Error::from(super::ErrorKind::OrderRequiredForPaging(
            OrderRequiredForPaging {
                first_row,
                max_rows,
            },
        ))
    }

    /// Returns `true` if this error is an order-required-for-paging error.
    pub fn is_order_required_for_paging(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::OrderRequiredForPaging(_))
    }
}
