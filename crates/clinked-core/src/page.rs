//! Pagination — page requests and the page descriptor returned to callers.
//!
//! Bounds are enforced once, at the request boundary, by
//! [`PageRequest::checked`]. Past that point a request is assumed valid;
//! [`PageRequest::new`] only keeps the size at least one.

use serde::Serialize;

use crate::error::{Error, Result};

pub const MIN_PAGE_INDEX: u32 = 0;
pub const MAX_PAGE_INDEX: u32 = 99;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 99;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Zero-based page index plus page size. The size is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    index: u32,
    size: u32,
}

impl PageRequest {
    /// Unchecked constructor for trusted callers. Index and size are taken
    /// as given, except that a zero size is raised to [`MIN_PAGE_SIZE`].
    pub fn new(index: u32, size: u32) -> Self {
        Self {
            index,
            size: size.max(MIN_PAGE_SIZE),
        }
    }

    /// Validate raw request values against the enumerated bounds.
    pub fn checked(index: i64, size: i64) -> Result<Self> {
        let index = bounded("next", index, MIN_PAGE_INDEX, MAX_PAGE_INDEX)?;
        let size = bounded("max", size, MIN_PAGE_SIZE, MAX_PAGE_SIZE)?;
        Ok(Self { index, size })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Position of the first item of this page in the filtered collection.
    pub fn offset(&self) -> usize {
        self.index as usize * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: MIN_PAGE_INDEX,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn bounded(name: &'static str, value: i64, min: u32, max: u32) -> Result<u32> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(Error::InvalidArgument {
            name,
            value,
            min: i64::from(min),
            max: i64::from(max),
        });
    }
    // In range, so the narrowing cannot truncate.
    Ok(value as u32)
}

/// A bounded slice of matching items plus the count metadata needed to page
/// through the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_index: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_elements: u64, request: PageRequest) -> Self {
        Self {
            page_index: request.index,
            page_size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(request.size)),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when a later page could hold items.
    pub fn has_next(&self) -> bool {
        u64::from(self.page_index) + 1 < self.total_pages
    }
}

/// Cut one page out of an already-filtered, ordered sequence.
pub fn slice<T>(matching: impl IntoIterator<Item = T>, request: PageRequest) -> Vec<T> {
    matching
        .into_iter()
        .skip(request.offset())
        .take(request.size as usize)
        .collect()
}
