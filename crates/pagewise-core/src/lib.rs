pub mod driver;
pub use driver::Capability;

mod error;
pub use error::Error;

pub mod stmt;
pub use stmt::Query;

/// A Result type alias that uses pagewise's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
