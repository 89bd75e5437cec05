//! 简单的 SELECT 语句拼接工具
//!
//! [`QueryBuilder`] 按调用顺序累积查询列、where 条件、分组、排序和 limit 片段，
//! 最后由 [`QueryBuilder::build`] 拼接为完整语句。片段原样写入，不做转义。
//!
//! 启用 `debug-logging` feature 后，`build` 生成的 SQL 以及被拒绝的 and / or 调用
//! 会通过 `tracing::debug!` 输出。

/// 仅在启用 `debug-logging` feature 时输出调试日志
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod error;
pub mod pagination;
pub mod query_builder;

pub use error::{ErrorKind, Result, SqlSelectError};
pub use pagination::{PageInfo, Pagination};
pub use query_builder::{ConditionType, QueryBuilder, SortOrder};
