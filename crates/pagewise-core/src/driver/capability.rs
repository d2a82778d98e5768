/// Describes the pagination features a target SQL dialect exposes.
///
/// The rewriter picks its pagination strategy from these flags once, when it
/// is configured for a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// The dialect can skip rows before the first row of a window.
    pub first_row: bool,

    /// The dialect can cap the number of rows a query returns.
    pub max_rows: bool,

    /// SQL: supports `OFFSET n ROWS FETCH NEXT m ROWS ONLY` after `ORDER BY`.
    pub offset_fetch: bool,

    /// SQL: supports `ROW_NUMBER() OVER(ORDER BY ...)` and common table
    /// expressions.
    pub row_number: bool,
}

impl Capability {
    /// A dialect with no pagination support. Windows are left to the caller,
    /// which skips and truncates rows client-side.
    pub const GENERIC: Self = Self {
        first_row: false,
        max_rows: false,
        offset_fetch: false,
        row_number: false,
    };

    /// SQL Server 2012 and later.
    pub const SQL_SERVER: Self = Self {
        first_row: true,
        max_rows: true,
        offset_fetch: true,
        row_number: true,
    };

    /// SQL Server 2008 and earlier: no `OFFSET / FETCH`, but `ROW_NUMBER()`
    /// and CTEs are available.
    pub const SQL_SERVER_2008: Self = Self {
        offset_fetch: false,
        ..Self::SQL_SERVER
    };

    /// Oracle 12c and later.
    pub const ORACLE: Self = Self::SQL_SERVER;

    /// IBM DB2 (LUW 11.1 and later).
    pub const DB2: Self = Self::SQL_SERVER;

    /// Apache Derby. Derby has no `ROW_NUMBER()` over an ordering.
    pub const DERBY: Self = Self {
        row_number: false,
        ..Self::SQL_SERVER
    };

    /// Returns `true` if the dialect can apply `first_row` natively.
    pub fn supports_first_row(&self) -> bool {
        self.first_row
    }

    /// Returns `true` if the dialect can apply `max_rows` natively.
    pub fn supports_max_rows(&self) -> bool {
        self.max_rows
    }
}
