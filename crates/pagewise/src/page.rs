/// A row window applied by the caller to rows the database returned.
///
/// Used for dialects that cannot render a window themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientPage {
    /// Rows to skip from the start of the result.
    pub skip: u32,

    /// Maximum rows to keep after skipping. `None` keeps the rest.
    pub take: Option<u32>,
}

impl ClientPage {
    pub fn is_noop(&self) -> bool {
        self.skip == 0 && self.take.is_none()
    }

    /// Applies the window to an iterator of rows.
    pub fn apply<I: IntoIterator>(self, rows: I) -> impl Iterator<Item = I::Item> {
        let take = self.take.map_or(usize::MAX, |take| take as usize);
        rows.into_iter().skip(self.skip as usize).take(take)
    }
}
