//! Row-window pagination for SQL dialects without `LIMIT / OFFSET`.
//!
//! Configure a [`Rewriter`] once for the target database, then call
//! [`Rewriter::rewrite`] for each query:
//!
//! ```
//! use pagewise::{stmt::{Expr, OrderByExpr, Query}, Rewriter};
//!
//! let rewriter = Rewriter::connect("sqlserver://db.local/app").unwrap();
//!
//! let query = Query::builder()
//!     .select(Expr::column("id"))
//!     .from("users")
//!     .order_by(OrderByExpr::asc(Expr::column("id")))
//!     .first_row(11)
//!     .max_rows(10)
//!     .build();
//!
//! assert_eq!(
//!     rewriter.rewrite(&query).unwrap(),
//!     "SELECT id FROM users ORDER BY id ASC OFFSET 10 ROWS FETCH NEXT 10 ROWS ONLY",
//! );
//! ```

mod dialect;
pub use dialect::Dialect;

mod page;
pub use page::ClientPage;

mod rewriter;
pub use rewriter::Rewriter;

pub use pagewise_core::{stmt, Capability, Error, Result};
pub use pagewise_sql::{Clauses, Pagination, Serializer};
