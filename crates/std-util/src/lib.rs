pub mod result;
pub mod str;

pub mod prelude {
    pub use crate::{assert_contains, assert_err, assert_ok, str::count_matches};
}
