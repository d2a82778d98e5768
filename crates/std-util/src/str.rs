/// Asserts that `$haystack` contains `$needle`, printing both on failure.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {{
        match (&$haystack, &$needle) {
            (haystack, needle) => {
                let haystack: &str = ::core::convert::AsRef::as_ref(haystack);
                let needle: &str = ::core::convert::AsRef::as_ref(needle);
                assert!(
                    haystack.contains(needle),
                    "expected string to contain `{needle}`; actual=`{haystack}`"
                );
            }
        }
    }};
}

/// Counts the non-overlapping occurrences of `needle` in `haystack`.
pub fn count_matches(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::count_matches;

    #[test]
    fn counts_non_overlapping() {
        assert_eq!(count_matches("a, a, a", "a"), 3);
        assert_eq!(count_matches("aaaa", "aa"), 2);
        assert_eq!(count_matches("abc", "x"), 0);
    }

    #[test]
    fn contains_macro_accepts_owned_and_borrowed() {
        let sql = String::from("SELECT a FROM t");
        assert_contains!(sql, "FROM t");
        assert_contains!("SELECT a", String::from("SELECT"));
    }
}
