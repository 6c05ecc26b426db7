//! Pagination tokens.
//!
//! List results carry an opaque `nextToken`. When it is present and non-empty,
//! the caller copies it into the next request to continue listing; absent or
//! empty means the listing is complete. This module only moves tokens between
//! shapes. Fetch loops belong to the transport.

use crate::operation::Operation;
use crate::settings::Settings;

/// A list result holding one page of items.
pub trait Paginated {
    type Item;

    /// Items on this page. Absent when the service omitted the list.
    fn items(&self) -> Option<&[Self::Item]>;

    fn next_token(&self) -> Option<&str>;

    fn has_more_pages(&self) -> bool {
        self.next_token().is_some_and(|token| !token.is_empty())
    }
}

/// A list request that can be continued from a previous page.
pub trait PageRequest: Operation<Output: Paginated> + Clone {
    fn page_token(&self) -> Option<&str>;

    fn set_page_token(&mut self, token: Option<String>);

    fn page_size(&self) -> Option<i32>;

    fn set_page_size(&mut self, size: Option<i32>);

    /// The request for the page after `page`, or `None` when listing is done.
    fn continue_from(&self, page: &Self::Output) -> Option<Self> {
        let token = page.next_token().filter(|token| !token.is_empty())?;
        let mut next = self.clone();
        next.set_page_token(Some(token.to_string()));
        Some(next)
    }

    /// Fill in `maxResults` from settings when the caller left it absent.
    #[must_use]
    fn with_default_page_size(mut self, settings: &Settings) -> Self {
        if self.page_size().is_none() {
            self.set_page_size(Some(settings.effective_page_size()));
        }
        self
    }
}
