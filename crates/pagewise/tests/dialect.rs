use pagewise::{Dialect, Pagination};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

#[test]
fn bare_names() {
    assert_eq!(assert_ok!(Dialect::parse("generic")), Dialect::Generic);
    assert_eq!(assert_ok!(Dialect::parse("ANSI")), Dialect::Generic);
    assert_eq!(assert_ok!(Dialect::parse("sqlserver")), Dialect::SqlServer);
    assert_eq!(assert_ok!(Dialect::parse("mssql")), Dialect::SqlServer);
    assert_eq!(assert_ok!(Dialect::parse("SqlServer2008")), Dialect::SqlServer2008);
    assert_eq!(assert_ok!(Dialect::parse("oracle")), Dialect::Oracle);
    assert_eq!(assert_ok!(Dialect::parse("db2")), Dialect::Db2);
    assert_eq!(assert_ok!(Dialect::parse(" derby ")), Dialect::Derby);
}

#[test]
fn connection_urls() {
    assert_eq!(
        assert_ok!(Dialect::parse("sqlserver://db.local:1433/app")),
        Dialect::SqlServer
    );
    assert_eq!(
        assert_ok!(Dialect::parse("jdbc:oracle://db.local/orcl")),
        Dialect::Oracle
    );
    assert_eq!(
        assert_ok!("db2://db.local/sample".parse::<Dialect>()),
        Dialect::Db2
    );
    assert_eq!(
        assert_ok!(Dialect::parse("jdbc:sqlserver://db.local:1433;databaseName=app")),
        Dialect::SqlServer
    );
    assert_eq!(
        assert_ok!(Dialect::parse("jdbc:sqlserver://db.local;databaseName=app;version=2008")),
        Dialect::SqlServer2008
    );
    assert_eq!(
        assert_ok!(Dialect::parse("sqlserver://db.local:1433/app?version=10;applicationName=x")),
        Dialect::SqlServer2008
    );
}

#[test]
fn jdbc_property_version_must_be_numeric() {
    let err = assert_err!(Dialect::parse("jdbc:sqlserver://db.local;version=new"));
    assert!(err.is_invalid_connection_url());
}

#[test]
fn sql_server_version_selects_strategy() {
    for (url, expected) in [
        ("sqlserver://h/db?version=2008", Dialect::SqlServer2008),
        ("sqlserver://h/db?version=2005", Dialect::SqlServer2008),
        ("sqlserver://h/db?version=10", Dialect::SqlServer2008),
        ("sqlserver://h/db?version=11", Dialect::SqlServer),
        ("sqlserver://h/db?version=2012", Dialect::SqlServer),
        ("mssql://h/db?version=2019", Dialect::SqlServer),
    ] {
        assert_eq!(assert_ok!(Dialect::parse(url)), expected, "url={url}");
    }

    assert_eq!(
        Dialect::SqlServer2008.serializer().pagination(),
        Pagination::RowNumber
    );
    assert_eq!(
        Dialect::SqlServer.serializer().pagination(),
        Pagination::OffsetFetch
    );
}

#[test]
fn old_oracle_falls_back_to_client_paging() {
    let dialect = assert_ok!(Dialect::parse("oracle://h/orcl?version=11"));
    assert_eq!(dialect, Dialect::Generic);
    assert_eq!(dialect.serializer().pagination(), Pagination::None);
}

#[test]
fn unknown_dialect() {
    let err = assert_err!(Dialect::parse("informix"));
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: unsupported database; dialect=informix"
    );

    let err = assert_err!(Dialect::parse("informix://h/db"));
    assert!(err.is_unsupported_feature());
}

#[test]
fn malformed_input() {
    let err = assert_err!(Dialect::parse(""));
    assert!(err.is_invalid_connection_url());

    let err = assert_err!(Dialect::parse("sqlserver://h/db?version=latest"));
    assert!(err.is_invalid_connection_url());
    assert!(err.to_string().starts_with("invalid connection URL: `version` must be a number"));

    let err = assert_err!(Dialect::parse("://missing-scheme"));
    assert!(err.is_invalid_connection_url());
}
