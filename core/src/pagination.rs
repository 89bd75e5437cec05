//! 分页参数
//!
//! `QueryBuilder::paginate` 只关心起始下标和每页条数，任何实现了
//! [`Pagination`] 的类型都可以传入。

use serde::{Deserialize, Serialize};

/// 分页信息来源
pub trait Pagination {
    /// 起始下标（从 0 开始）
    fn from_index(&self) -> i64;
    /// 每页条数
    fn page_size(&self) -> i64;
}

/// 按页码分页的参数
///
/// `page` 从 1 开始；`page` 为 0 时按第一页处理。起始下标溢出时取 `i64` 的边界值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: i64,
    pub size: i64,
}

impl PageInfo {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

impl Pagination for PageInfo {
    fn from_index(&self) -> i64 {
        self.page.saturating_sub(1).max(0).saturating_mul(self.size)
    }

    fn page_size(&self) -> i64 {
        self.size
    }
}

/// `(from_index, page_size)`
impl Pagination for (i64, i64) {
    fn from_index(&self) -> i64 {
        self.0
    }

    fn page_size(&self) -> i64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_from_index() {
        assert_eq!(PageInfo::new(1, 20).from_index(), 0);
        assert_eq!(PageInfo::new(3, 20).from_index(), 40);
        assert_eq!(PageInfo::new(3, 20).page_size(), 20);
    }

    #[test]
    fn test_page_zero_treated_as_first_page() {
        assert_eq!(PageInfo::new(0, 15).from_index(), 0);
        assert_eq!(PageInfo::new(-2, 15).from_index(), 0);
    }

    #[test]
    fn test_from_index_saturates() {
        assert_eq!(PageInfo::new(i64::MAX, 2).from_index(), i64::MAX);
        assert_eq!(PageInfo::new(i64::MIN, 2).from_index(), 0);
        assert_eq!(PageInfo::new(i64::MAX, -2).from_index(), i64::MIN);
    }

    #[test]
    fn test_deserialize_huge_page() {
        let page: PageInfo =
            serde_json::from_str(r#"{"page": 9223372036854775807, "size": 2}"#).unwrap();
        assert_eq!(page.from_index(), i64::MAX);
        assert_eq!(page.page_size(), 2);
    }

    #[test]
    fn test_default_page_info() {
        let page = PageInfo::default();
        assert_eq!(page.from_index(), 0);
        assert_eq!(page.page_size(), 10);
    }

    #[test]
    fn test_tuple_pagination() {
        let page = (30_i64, 15_i64);
        assert_eq!(page.from_index(), 30);
        assert_eq!(page.page_size(), 15);
    }

    #[test]
    fn test_deserialize_page_info() {
        let page: PageInfo = serde_json::from_str(r#"{"page": 2, "size": 25}"#).unwrap();
        assert_eq!(page, PageInfo::new(2, 25));
        assert_eq!(page.from_index(), 25);
    }
}
