use crate::Result;

use pagewise_core::Error;
use pagewise_sql::Serializer;
use std::str::FromStr;
use url::Url;

/// A target SQL dialect.
///
/// Parsed from either a bare name (`"sqlserver"`) or a connection URL whose
/// scheme names the database (`"sqlserver://host/db?version=2008"`). A
/// leading `jdbc:` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Standard SQL, no pagination support
    Generic,

    /// SQL Server 2012 and later
    SqlServer,

    /// SQL Server 2008 and earlier
    SqlServer2008,

    /// Oracle 12c and later
    Oracle,

    Db2,

    Derby,
}

impl Dialect {
    /// Parses a dialect name or connection URL.
    pub fn parse(input: &str) -> Result<Dialect> {
        let input = input.trim();
        let input = input.strip_prefix("jdbc:").unwrap_or(input);

        if !input.contains(':') {
            return Dialect::from_name(input, None);
        }

        // SQL Server JDBC URLs append `;key=value` properties to the authority.
        let (address, properties) = input.split_once(';').unwrap_or((input, ""));

        let url = Url::parse(address).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={input}"))
        })?;

        let version = url
            .query_pairs()
            .find(|(key, _)| key == "version")
            .map(|(_, value)| value.into_owned())
            .or_else(|| {
                properties
                    .split(';')
                    .filter_map(|property| property.split_once('='))
                    .find(|(key, _)| key.trim().eq_ignore_ascii_case("version"))
                    .map(|(_, value)| value.trim().to_string())
            })
            .map(|value| value.parse::<u32>())
            .transpose()
            .map_err(|err| {
                Error::from(err).context(Error::invalid_connection_url(format!(
                    "`version` must be a number; url={input}"
                )))
            })?;

        Dialect::from_name(url.scheme(), version)
    }

    fn from_name(name: &str, version: Option<u32>) -> Result<Dialect> {
        let dialect = match name.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Dialect::Generic,
            "sqlserver" | "mssql" => match version {
                Some(version) if is_sql_server_2008_or_older(version) => Dialect::SqlServer2008,
                _ => Dialect::SqlServer,
            },
            "sqlserver2008" | "mssql2008" => Dialect::SqlServer2008,
            "oracle" => match version {
                // OFFSET / FETCH arrived in 12c; older releases are paged by
                // the caller.
                Some(version) if version < 12 => Dialect::Generic,
                _ => Dialect::Oracle,
            },
            "db2" => Dialect::Db2,
            "derby" => Dialect::Derby,
            "" => {
                return Err(Error::invalid_connection_url("empty dialect name"));
            }
            name => {
                return Err(Error::unsupported_feature(format!(
                    "unsupported database; dialect={name}"
                )));
            }
        };

        tracing::debug!(?dialect, ?version, "resolved SQL dialect");
        Ok(dialect)
    }

    /// The serializer rendering queries for this dialect.
    pub fn serializer(self) -> Serializer {
        match self {
            Dialect::Generic => Serializer::generic(),
            Dialect::SqlServer => Serializer::sql_server(),
            Dialect::SqlServer2008 => Serializer::sql_server_2008(),
            Dialect::Oracle => Serializer::oracle(),
            Dialect::Db2 => Serializer::db2(),
            Dialect::Derby => Serializer::derby(),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::parse(s)
    }
}

/// SQL Server versions are accepted either as the product year (`2008`) or
/// the major version number (`10` is 2008 / 2008 R2, `11` is 2012).
fn is_sql_server_2008_or_older(version: u32) -> bool {
    if version < 100 {
        version <= 10
    } else {
        version <= 2008
    }
}
