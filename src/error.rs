use std::fmt;

// =========================================================
// 错误类别枚举
// =========================================================

/// 错误类别枚举
/// 区分认证失败、存储失败等不同语义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorKind {
    /// 身份提供方拒绝凭据，或本地校验（如两次密码不一致）失败
    Auth,
    /// 持久化存储读写失败
    Storage,
    /// 网络请求失败（无法到达身份提供方）
    Network,
    /// JSON 解析或序列化错误
    Serialization,
}

impl AppErrorKind {
    /// 机器可读的错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            AppErrorKind::Auth => "AUTH_FAILED",
            AppErrorKind::Storage => "STORAGE_WRITE_FAILED",
            AppErrorKind::Network => "NETWORK_ERROR",
            AppErrorKind::Serialization => "JSON_PARSE_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 应用领域错误
///
/// 包含：
/// - kind: 错误类别/语义
/// - message: 面向用户的不透明错误消息（直接展示，不做重试）
#[derive(Debug, Clone)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Auth, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Serialization, message)
    }

    // --- Accessors ---

    /// 获取机器可读的错误代码
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = std::result::Result<T, AppError>;
