use super::Serializer;

use pagewise_core::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Generic,
    SqlServer,
    SqlServer2008,
    Oracle,
    Db2,
    Derby,
}

impl Flavor {
    pub(super) fn capability(self) -> Capability {
        match self {
            Flavor::Generic => Capability::GENERIC,
            Flavor::SqlServer => Capability::SQL_SERVER,
            Flavor::SqlServer2008 => Capability::SQL_SERVER_2008,
            Flavor::Oracle => Capability::ORACLE,
            Flavor::Db2 => Capability::DB2,
            Flavor::Derby => Capability::DERBY,
        }
    }

    pub(super) fn name(self) -> &'static str {
        match self {
            Flavor::Generic => "generic",
            Flavor::SqlServer => "sqlserver",
            Flavor::SqlServer2008 => "sqlserver2008",
            Flavor::Oracle => "oracle",
            Flavor::Db2 => "db2",
            Flavor::Derby => "derby",
        }
    }
}

impl Serializer {
    /// Standard SQL without any pagination support.
    pub fn generic() -> Serializer {
        Serializer::new(Flavor::Generic)
    }

    /// SQL Server 2012 and later, paginated with `OFFSET / FETCH`.
    pub fn sql_server() -> Serializer {
        Serializer::new(Flavor::SqlServer)
    }

    /// SQL Server 2008 and earlier, paginated with `ROW_NUMBER()`.
    pub fn sql_server_2008() -> Serializer {
        Serializer::new(Flavor::SqlServer2008)
    }

    pub fn oracle() -> Serializer {
        Serializer::new(Flavor::Oracle)
    }

    pub fn db2() -> Serializer {
        Serializer::new(Flavor::Db2)
    }

    pub fn derby() -> Serializer {
        Serializer::new(Flavor::Derby)
    }
}
