//! Pagination and sorting primitives for post listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Post;
use crate::error::DomainError;

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `asc` in any letter case is ascending; every other value is descending.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// Post attributes a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    Description,
    Content,
}

impl PostSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostSortField::Id => "id",
            PostSortField::Title => "title",
            PostSortField::Description => "description",
            PostSortField::Content => "content",
        }
    }

    /// Ascending comparison of two posts on this field.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            PostSortField::Id => a.id.cmp(&b.id),
            PostSortField::Title => a.title.cmp(&b.title),
            PostSortField::Description => a.description.cmp(&b.description),
            PostSortField::Content => a.content.cmp(&b.content),
        }
    }
}

impl fmt::Display for PostSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(PostSortField::Id),
            "title" => Ok(PostSortField::Title),
            "description" => Ok(PostSortField::Description),
            "content" => Ok(PostSortField::Content),
            other => Err(DomainError::Validation(format!(
                "cannot sort posts by '{other}'"
            ))),
        }
    }
}

/// Largest accepted page size. Stores bind limits and offsets as signed 64-bit
/// integers.
pub const MAX_PAGE_SIZE: u64 = i64::MAX as u64;

/// A zero-based page window over the posts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_no: u64,
    pub page_size: u64,
    pub sort_by: PostSortField,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn new(
        page_no: u64,
        page_size: u64,
        sort_by: &str,
        sort_dir: &str,
    ) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(DomainError::Validation(format!(
                "page size must be at most {MAX_PAGE_SIZE}"
            )));
        }

        Ok(Self {
            page_no,
            page_size,
            sort_by: sort_by.parse()?,
            direction: SortDirection::parse(sort_dir),
        })
    }

    /// Number of rows before this page, `None` if it does not fit in a `u64`.
    pub fn offset(&self) -> Option<u64> {
        self.page_no.checked_mul(self.page_size)
    }

    /// Whether this window starts at or after row `total`.
    pub fn is_beyond(&self, total: u64) -> bool {
        self.offset().is_none_or(|offset| offset >= total)
    }
}

/// One page of a listing together with its position in the whole result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_no: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.page_size);

        Self {
            content,
            page_no: request.page_no,
            page_size: request.page_size,
            total_elements,
            total_pages,
            first: request.page_no == 0,
            last: request.page_no.saturating_add(1) >= total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}
