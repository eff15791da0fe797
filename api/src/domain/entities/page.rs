//! Pagination values
//!
//! `PageRequest` describes which slice of a result set to fetch and `Page`
//! carries that slice together with the size of the whole set.

use crate::error::DomainError;

/// A zero-based page index and a page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    index: u64,
    size: u64,
}

impl PageRequest {
    /// Create a page request. The size must be at least 1.
    pub fn new(index: u64, size: u64) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::Validation(
                "Page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self { index, size })
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of records preceding this page, `None` when it does not fit in a u64
    pub fn offset(&self) -> Option<u64> {
        self.index.checked_mul(self.size)
    }
}

/// A slice of an ordered result set plus the total count across all pages
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub index: u64,
    pub size: u64,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            items,
            index: request.index(),
            size: request.size(),
            total_count,
        }
    }

    /// An empty page for the request, keeping the real total
    pub fn empty(request: PageRequest, total_count: u64) -> Self {
        Self::new(Vec::new(), request, total_count)
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.size)
    }

    pub fn number_of_elements(&self) -> usize {
        self.items.len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index.saturating_add(1) >= self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert the items while keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            index: self.index,
            size: self.size,
            total_count: self.total_count,
        }
    }
}
