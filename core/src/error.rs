use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlSelectError {
    /// and / or 调用顺序不合法：未先调用 where，或混用 and 与 or
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),
    /// 参数不合法，例如排序方向不是 asc / desc
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// 构建器状态不完整，例如未指定查询列
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// 错误类别，便于调用方按类别判断而不依赖错误消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PreconditionViolation,
    InvalidArgument,
    InvalidState,
}

impl SqlSelectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SqlSelectError::PreconditionViolation(_) => ErrorKind::PreconditionViolation,
            SqlSelectError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            SqlSelectError::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}

pub type Result<T> = std::result::Result<T, SqlSelectError>;
