use pagewise::{
    stmt::{Expr, OrderByExpr, Query, QueryBuilder},
    ClientPage, Dialect, Rewriter,
};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn orders() -> QueryBuilder {
    Query::builder()
        .select(Expr::column("id"))
        .select(Expr::column("total"))
        .from("orders")
        .order_by(OrderByExpr::desc(Expr::column("total")))
}

#[test]
fn offset_fetch_through_connection_url() {
    let rewriter = assert_ok!(Rewriter::connect("sqlserver://db.local/shop"));
    let sql = assert_ok!(rewriter.rewrite(&orders().first_row(5).max_rows(10).build()));

    assert_eq!(
        sql,
        "SELECT id, total FROM orders ORDER BY total DESC OFFSET 4 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn row_number_through_connection_url() {
    let rewriter = assert_ok!(Rewriter::connect("sqlserver://db.local/shop?version=2008"));
    let sql = assert_ok!(rewriter.rewrite(&orders().first_row(5).max_rows(10).build()));

    assert_eq!(
        sql,
        ";WITH QR AS (SELECT id, total, ROW_NUMBER() OVER(ORDER BY total DESC) AS RowNum \
         FROM orders) SELECT * FROM QR WHERE RowNum BETWEEN 5 AND 10"
    );
}

#[test]
fn unordered_window_is_rejected() {
    let rewriter = Rewriter::new(Dialect::SqlServer);
    let query = Query::builder()
        .select(Expr::column("id"))
        .from("orders")
        .max_rows(10)
        .build();

    let err = assert_err!(rewriter.rewrite(&query));
    assert!(err.is_order_required_for_paging());
}

#[test]
fn capabilities_follow_dialect() {
    let rewriter = Rewriter::new(Dialect::SqlServer2008);
    assert_eq!(rewriter.dialect(), Dialect::SqlServer2008);
    assert!(rewriter.capability().supports_first_row());
    assert!(rewriter.capability().supports_max_rows());

    let rewriter = Rewriter::new(Dialect::Generic);
    assert!(!rewriter.capability().supports_first_row());
    assert!(!rewriter.capability().supports_max_rows());
}

#[test]
fn client_page_only_for_unsupported_windows() {
    let windowed = orders().first_row(3).max_rows(2).build();

    assert_eq!(Rewriter::new(Dialect::SqlServer).client_page(&windowed), None);
    assert_eq!(Rewriter::new(Dialect::SqlServer2008).client_page(&windowed), None);

    let generic = Rewriter::new(Dialect::Generic);
    assert_eq!(
        generic.client_page(&windowed),
        Some(ClientPage {
            skip: 2,
            take: Some(2)
        })
    );
    assert_eq!(generic.client_page(&orders().build()), None);
    assert_eq!(generic.client_page(&orders().first_row(1).build()), None);
}

#[test]
fn client_page_applies_to_rows() {
    let page = ClientPage {
        skip: 2,
        take: Some(3),
    };
    let rows: Vec<_> = page.apply(1..=10).collect();
    assert_eq!(rows, vec![3, 4, 5]);

    let page = ClientPage {
        skip: 8,
        take: None,
    };
    let rows: Vec<_> = page.apply(1..=10).collect();
    assert_eq!(rows, vec![9, 10]);

    let page = ClientPage {
        skip: 0,
        take: Some(0),
    };
    assert_eq!(page.apply(1..=10).count(), 0);
}

#[test]
fn generic_rendering_plus_client_page_matches_window() {
    let rewriter = Rewriter::new(Dialect::Generic);
    let query = orders().first_row(2).max_rows(2).build();

    let sql = assert_ok!(rewriter.rewrite(&query));
    assert_eq!(sql, "SELECT id, total FROM orders ORDER BY total DESC");

    let rows = ["a", "b", "c", "d"];
    let page = rewriter.client_page(&query).unwrap();
    assert_eq!(page.apply(rows).collect::<Vec<_>>(), vec!["b", "c"]);
}
