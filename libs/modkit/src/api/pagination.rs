//! Page-number pagination translated into SQL `LIMIT`/`OFFSET`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Raw paging parameters as received from a query string.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Resolved page with the derived limit/offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be >= 1 and address a row within range")]
    InvalidPage,
    #[error("page_size must be between 1 and {max}")]
    InvalidPageSize { max: u64 },
}

const SQL_MAX: u64 = i64::MAX as u64;

impl PageRequest {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self { page, page_size }
    }

    /// Validate against the module limits. Missing values default to page 1 and
    /// `default_size`.
    pub fn resolve(self, default_size: u64, max_size: u64) -> Result<PageWindow, PaginationError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(PaginationError::InvalidPage);
        }
        let page_size = self.page_size.unwrap_or(default_size);
        if page_size < 1 || page_size > max_size || page_size > SQL_MAX {
            return Err(PaginationError::InvalidPageSize { max: max_size });
        }
        // SQL binds LIMIT/OFFSET as signed 64-bit integers.
        let offset = (page - 1)
            .checked_mul(page_size)
            .filter(|offset| *offset <= SQL_MAX)
            .ok_or(PaginationError::InvalidPage)?;
        Ok(PageWindow {
            page,
            page_size,
            limit: page_size,
            offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let w = PageRequest::default().resolve(10, 100).unwrap();
        assert_eq!(
            w,
            PageWindow {
                page: 1,
                page_size: 10,
                limit: 10,
                offset: 0
            }
        );
    }

    #[test]
    fn offset_follows_page_number() {
        let w = PageRequest::new(Some(3), Some(25)).resolve(10, 100).unwrap();
        assert_eq!(w.limit, 25);
        assert_eq!(w.offset, 50);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            PageRequest::new(Some(0), None).resolve(10, 100),
            Err(PaginationError::InvalidPage)
        );
        assert_eq!(
            PageRequest::new(None, Some(0)).resolve(10, 100),
            Err(PaginationError::InvalidPageSize { max: 100 })
        );
        assert_eq!(
            PageRequest::new(None, Some(101)).resolve(10, 100),
            Err(PaginationError::InvalidPageSize { max: 100 })
        );
    }

    #[test]
    fn rejects_offsets_beyond_signed_range() {
        assert_eq!(
            PageRequest::new(Some(u64::MAX), Some(1)).resolve(10, 100),
            Err(PaginationError::InvalidPage)
        );
        assert_eq!(
            PageRequest::new(Some(u64::MAX / 2), Some(100)).resolve(10, 100),
            Err(PaginationError::InvalidPage)
        );
        let edge = PageRequest::new(Some(i64::MAX as u64 + 1), Some(1))
            .resolve(10, 100)
            .unwrap();
        assert_eq!(edge.offset, i64::MAX as u64);
    }

    #[test]
    fn rejects_page_size_beyond_signed_range() {
        assert_eq!(
            PageRequest::new(None, Some(u64::MAX)).resolve(10, u64::MAX),
            Err(PaginationError::InvalidPageSize { max: u64::MAX })
        );
    }
}
