//! Pagination types shared by the store trait and the HTTP layer.

use serde::{Deserialize, Serialize};

/// Sort direction over an entity's insertion (id) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
  #[default]
  Asc,
  Desc,
}

impl SortDir {
  pub fn as_sql(self) -> &'static str {
    match self {
      SortDir::Asc => "ASC",
      SortDir::Desc => "DESC",
    }
  }
}

/// A bounded-page request: 0-based page index, page size, sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  pub page: u32,
  pub size: u32,
  pub sort: SortDir,
}

impl PageRequest {
  pub const DEFAULT_SIZE: u32 = 20;

  pub fn new(page: u32, size: u32, sort: SortDir) -> Self {
    // A zero page size would make total_pages undefined.
    Self { page, size: size.max(1), sort }
  }

  /// Row offset for this page, as the SQL layer binds it. Computed in u64
  /// so caller-supplied page/size values cannot overflow, clamped to i64
  /// for the SQLite binding.
  pub fn offset(&self) -> i64 {
    (u64::from(self.page) * u64::from(self.size)).min(i64::MAX as u64) as i64
  }
}

impl Default for PageRequest {
  fn default() -> Self {
    Self::new(0, Self::DEFAULT_SIZE, SortDir::Asc)
  }
}

/// One page of results plus the metadata needed to fetch the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  pub content:        Vec<T>,
  pub page:           u32,
  pub size:           u32,
  pub total_elements: u64,
  pub total_pages:    u32,
}

impl<T> Page<T> {
  pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
    let size = size.max(1);
    let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
    Self { content, page, size, total_elements, total_pages }
  }

  /// A single page holding every row, for unpaged listings.
  pub fn unpaged(content: Vec<T>) -> Self {
    let total = content.len() as u64;
    let size = (content.len() as u32).max(1);
    Self::new(content, 0, size, total)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn total_pages_rounds_up() {
    let p = Page::new(vec![1, 2, 3], 0, 2, 5);
    assert_eq!(p.total_pages, 3);
  }

  #[test]
  fn unpaged_holds_everything() {
    let p = Page::unpaged(vec!["a", "b"]);
    assert_eq!(p.total_elements, 2);
    assert_eq!(p.total_pages, 1);
  }

  #[test]
  fn offset_is_page_times_size() {
    let req = PageRequest::new(3, 25, SortDir::Desc);
    assert_eq!(req.offset(), 75);
  }

  #[test]
  fn offset_handles_huge_page_and_size() {
    // page * size here exceeds u32::MAX; the offset must not wrap.
    let req = PageRequest::new(300_000, 20_000, SortDir::Asc);
    assert_eq!(req.offset(), 6_000_000_000);

    let worst = PageRequest::new(u32::MAX, u32::MAX, SortDir::Asc);
    assert_eq!(worst.offset(), i64::MAX);
  }
}
