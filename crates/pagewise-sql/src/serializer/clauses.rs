/// Selects which clauses of a query the serializer writes.
///
/// Passed explicitly on every render so the same query renders the same way
/// unless the caller asks otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clauses {
    /// Write the `SELECT ...` list.
    pub select: bool,

    /// Write the `ORDER BY ...` list.
    pub order_by: bool,
}

impl Clauses {
    /// Every clause of the query.
    pub const ALL: Clauses = Clauses {
        select: true,
        order_by: true,
    };

    /// Everything between the select list and the ordering: `FROM`, joins,
    /// `WHERE`, `GROUP BY` and `HAVING`.
    pub const BODY: Clauses = Clauses {
        select: false,
        order_by: false,
    };
}

impl Default for Clauses {
    fn default() -> Self {
        Clauses::ALL
    }
}
