use pagewise_sql::{
    stmt::{Expr, JoinKind, OrderByExpr, Query, TableRef},
    Clauses, Serializer,
};
use pretty_assertions::assert_eq;

#[test]
fn select_from_where_order_by() {
    let query = Query::builder()
        .select(Expr::column("id"))
        .select(Expr::column("name"))
        .from("users")
        .filter(Expr::gt(Expr::column("age"), 18))
        .order_by(OrderByExpr::desc(Expr::column("name")))
        .build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT id, name FROM users WHERE age > 18 ORDER BY name DESC"
    );
}

#[test]
fn window_is_ignored_by_default_rendering() {
    let query = Query::builder()
        .select(Expr::column("id"))
        .from("users")
        .order_by(Expr::column("id"))
        .first_row(3)
        .max_rows(7)
        .build();

    assert_eq!(
        Serializer::sql_server().serialize(&query),
        "SELECT id FROM users ORDER BY id"
    );
}

#[test]
fn joins_aliases_group_by_having() {
    let query = Query::builder()
        .select(Expr::qualified("u", "name"))
        .select_as(Expr::count_star(), "order_count")
        .from(TableRef::new("users").alias("u").schema("dbo"))
        .join(
            JoinKind::Left,
            TableRef::new("orders").alias("o"),
            Expr::eq(Expr::qualified("o", "user_id"), Expr::qualified("u", "id")),
        )
        .group_by(Expr::qualified("u", "name"))
        .having(Expr::gt(Expr::count_star(), 2))
        .order_by(OrderByExpr::asc(Expr::qualified("u", "name")))
        .build();

    assert_eq!(
        Serializer::sql_server().serialize(&query),
        "SELECT u.name, COUNT(*) AS order_count FROM dbo.users u \
         LEFT JOIN orders o ON o.user_id = u.id GROUP BY u.name \
         HAVING COUNT(*) > 2 ORDER BY u.name ASC"
    );
}

#[test]
fn select_and_order_by_fragments() {
    let query = Query::builder()
        .distinct()
        .select(Expr::column("city"))
        .from("addresses")
        .order_by(OrderByExpr::asc(Expr::column("city")))
        .order_by(OrderByExpr::desc(Expr::column("zip")))
        .build();

    let serializer = Serializer::generic();

    assert_eq!(serializer.select_clause(&query), "SELECT DISTINCT city");
    assert_eq!(
        serializer.order_by_clause(&query),
        "ORDER BY city ASC, zip DESC"
    );
    assert_eq!(
        serializer.serialize_with(&query, Clauses::BODY),
        "FROM addresses"
    );
    assert_eq!(
        serializer.serialize_with(
            &query,
            Clauses {
                select: true,
                order_by: false,
            }
        ),
        "SELECT DISTINCT city FROM addresses"
    );
}

#[test]
fn unordered_query_has_empty_order_by_fragment() {
    let query = Query::builder()
        .select(Expr::column("id"))
        .from("users")
        .build();

    assert_eq!(Serializer::generic().order_by_clause(&query), "");
}

#[test]
fn empty_select_list_renders_star() {
    let query = Query::builder().from("users").build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT * FROM users"
    );
}

#[test]
fn boolean_connectives_keep_precedence() {
    let query = Query::builder()
        .select(Expr::star())
        .from("t")
        .filter(Expr::or(
            Expr::eq(Expr::column("a"), 1),
            Expr::eq(Expr::column("b"), 2),
        ))
        .filter(Expr::not(Expr::and(
            Expr::is_null(Expr::column("c")),
            Expr::is_not_null(Expr::column("d")),
        )))
        .build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT * FROM t WHERE (a = 1 OR b = 2) AND NOT (c IS NULL AND d IS NOT NULL)"
    );
}

#[test]
fn null_comparisons_render_as_is_null() {
    let query = Query::builder()
        .select(Expr::star())
        .from("t")
        .filter(Expr::eq(Expr::column("a"), Expr::null()))
        .filter(Expr::ne(Expr::column("b"), Expr::null()))
        .build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT * FROM t WHERE a IS NULL AND b IS NOT NULL"
    );
}

#[test]
fn in_lists() {
    let query = Query::builder()
        .select(Expr::star())
        .from("t")
        .filter(Expr::in_list(Expr::column("a"), [1, 2, 3]))
        .filter(Expr::in_list(Expr::column("b"), Vec::<Expr>::new()))
        .build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT * FROM t WHERE a IN (1, 2, 3) AND 1 = 0"
    );
}

#[test]
fn functions() {
    let query = Query::builder()
        .select(Expr::count_distinct(Expr::column("city")))
        .select(Expr::func("UPPER", [Expr::column("name")]))
        .from("t")
        .build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT COUNT(DISTINCT city), UPPER(name) FROM t"
    );
}

#[test]
fn literals_generic() {
    let query = Query::builder()
        .select(Expr::value("it's"))
        .select(Expr::value(true))
        .select(Expr::value(1.5))
        .select(Expr::value(-7))
        .select(Expr::null())
        .build();

    assert_eq!(
        Serializer::generic().serialize(&query),
        "SELECT 'it''s', TRUE, 1.5, -7, NULL"
    );
}

#[test]
fn literals_sql_server() {
    let query = Query::builder()
        .select(Expr::value(false))
        .select(Expr::value("café"))
        .select(Expr::value("plain"))
        .build();

    assert_eq!(
        Serializer::sql_server().serialize(&query),
        "SELECT 0, N'café', 'plain'"
    );
}

#[test]
fn literals_oracle_booleans_are_numeric() {
    let query = Query::builder()
        .select(Expr::column("id"))
        .from("users")
        .filter(Expr::and(
            Expr::eq(Expr::column("active"), true),
            Expr::eq(Expr::column("locked"), false),
        ))
        .build();

    assert_eq!(
        Serializer::oracle().serialize(&query),
        "SELECT id FROM users WHERE active = 1 AND locked = 0"
    );
    assert_eq!(
        Serializer::db2().serialize(&query),
        "SELECT id FROM users WHERE active = TRUE AND locked = FALSE"
    );
}

#[test]
fn reserved_words_are_quoted_per_dialect() {
    let query = Query::builder()
        .select(Expr::column("order"))
        .select(Expr::column("name"))
        .from("user")
        .order_by(OrderByExpr::asc(Expr::column("order")))
        .build();

    assert_eq!(
        Serializer::sql_server().serialize(&query),
        "SELECT [order], name FROM [user] ORDER BY [order] ASC"
    );
    assert_eq!(
        Serializer::derby().serialize(&query),
        r#"SELECT "order", name FROM "user" ORDER BY "order" ASC"#
    );
}

#[test]
fn identifiers_are_quoted_per_dialect() {
    let query = Query::builder()
        .select(Expr::column("first name"))
        .select_as(Expr::column("id"), "user id")
        .from("order items")
        .build();

    assert_eq!(
        Serializer::sql_server().serialize(&query),
        "SELECT [first name], id AS [user id] FROM [order items]"
    );
    assert_eq!(
        Serializer::oracle().serialize(&query),
        "SELECT \"first name\", id AS \"user id\" FROM \"order items\""
    );
}

#[test]
fn quote_characters_are_doubled() {
    let query = Query::builder()
        .select(Expr::column("a]b"))
        .select(Expr::column("c\"d"))
        .build();

    assert_eq!(
        Serializer::sql_server().serialize(&query),
        "SELECT [a]]b], [c\"d]"
    );
    assert_eq!(
        Serializer::db2().serialize(&query),
        "SELECT \"a]b\", \"c\"\"d\""
    );
}
