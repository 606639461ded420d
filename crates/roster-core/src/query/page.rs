//! Offset paging
//!
//! `Page::assemble` decides whether the total row count is already implied by
//! the fetched content and only runs the count query when it is not.

use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Page size used when a caller does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Offset/size window over an ordered result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Window starting at row `offset` holding at most `size` rows
    pub fn new(offset: i64, size: i64) -> Result<Self, DomainError> {
        if size < 1 {
            return Err(DomainError::InvalidPageRequest(format!(
                "page size must be at least 1, got {size}"
            )));
        }
        if offset < 0 {
            return Err(DomainError::InvalidPageRequest(format!(
                "offset must not be negative, got {offset}"
            )));
        }
        if offset.checked_add(size).is_none() {
            return Err(DomainError::InvalidPageRequest(format!(
                "window at offset {offset} of size {size} is out of range"
            )));
        }
        Ok(Self { offset, size })
    }

    /// Zero-based page number `page` of pages holding `size` rows
    pub fn of(page: i64, size: i64) -> Result<Self, DomainError> {
        if page < 0 {
            return Err(DomainError::InvalidPageRequest(format!(
                "page number must not be negative, got {page}"
            )));
        }
        let offset = page.checked_mul(size).ok_or_else(|| {
            DomainError::InvalidPageRequest(format!("page {page} of size {size} is out of range"))
        })?;
        Self::new(offset, size)
    }

    #[inline]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    #[inline]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Zero-based page number this window falls in
    #[inline]
    pub const fn page_number(&self) -> i64 {
        self.offset / self.size
    }

    /// The window directly after this one
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.size),
            size: self.size,
        }
    }
}

/// How a paged search obtains its total
///
/// Names are parsed case-insensitively through `FromStr`, also when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PagingStrategy {
    /// Content and total in one round trip
    Simple,
    /// Content first, count query only when the total is not implied
    #[default]
    Optimized,
}

impl TryFrom<String> for PagingStrategy {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl PagingStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Optimized => "optimized",
        }
    }
}

impl FromStr for PagingStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "optimized" | "complex" => Ok(Self::Optimized),
            other => Err(DomainError::ValidationError(format!(
                "unknown paging strategy: {other}"
            ))),
        }
    }
}

/// Total row count when the fetched content already determines it.
///
/// - first page not filled: the content is everything
/// - later page not filled and not empty: it is the last page
///
/// An empty page past the first tells nothing, the offset may overshoot.
pub fn known_total(content_len: usize, request: PageRequest) -> Option<i64> {
    let len = i64::try_from(content_len).ok()?;
    if len >= request.size() {
        return None;
    }
    if request.offset() == 0 {
        return Some(len);
    }
    if len > 0 {
        return Some(request.offset().saturating_add(len));
    }
    None
}

/// One page of results plus the total across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total: i64,
}

impl<T> Page<T> {
    /// Build a page from content and a reported total.
    ///
    /// A non-empty page that ends before `offset + size` caps the total at
    /// the rows actually seen, so a stale count cannot claim rows that the
    /// content query did not return.
    pub fn new(content: Vec<T>, request: PageRequest, total: i64) -> Self {
        let seen = request.offset().saturating_add(content.len() as i64);
        let end = request.offset().saturating_add(request.size());
        let total = if !content.is_empty() && end > total {
            seen
        } else {
            total
        };

        Self {
            content,
            request,
            total,
        }
    }

    /// Build a page, calling `count` only when the content leaves the total open
    pub async fn assemble<F, Fut, E>(content: Vec<T>, request: PageRequest, count: F) -> Result<Self, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<i64, E>>,
    {
        let total = match known_total(content.len(), request) {
            Some(total) => total,
            None => count().await?,
        };
        Ok(Self::new(content, request, total))
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Rows matching the search across all pages
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Rows on this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn number(&self) -> i64 {
        self.request.page_number()
    }

    pub fn total_pages(&self) -> i64 {
        let size = self.request.size();
        self.total / size + i64::from(self.total % size != 0)
    }

    pub fn has_next(&self) -> bool {
        self.request.offset().saturating_add(self.request.size()) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.request.offset() > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Convert the content while keeping paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total: self.total,
        }
    }
}
