// src/application/dto/pagination.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated 1-indexed pagination input. The size cap keeps a single
/// request from scanning the whole collection.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
    offset: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> ApplicationResult<Self> {
        if page == 0 {
            return Err(ApplicationError::validation("page must be at least 1"));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ApplicationError::validation(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        let offset = (page - 1)
            .checked_mul(page_size)
            .ok_or_else(|| ApplicationError::validation("page is out of range"))?;
        Ok(Self {
            page,
            page_size,
            offset,
        })
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    pub const fn offset(&self) -> u32 {
        self.offset
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        let page_count = u32::try_from(total.div_ceil(u64::from(request.page_size())))
            .unwrap_or(u32::MAX);
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
            page_count,
        }
    }
}
