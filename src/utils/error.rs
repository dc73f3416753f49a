use thiserror::Error;

/// 對外固定訊息：請求的 URL 不是支援的專輯頁面
pub const INVALID_ALBUM_URL_MESSAGE: &str = "URL album không hợp lệ.";

/// 對外固定訊息：無法取得或解析專輯資料
pub const ALBUM_FETCH_FAILED_MESSAGE: &str = "Không thể lấy dữ liệu album WeChat.";

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("Invalid album URL: {url:?}")]
    InvalidRequest { url: Option<String> },

    #[error("Upstream request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Invalid selector `{selector}`: {message}")]
    SelectorError { selector: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration `{field}`")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Upstream,
    Configuration,
    System,
}

impl AlbumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AlbumError::InvalidRequest { .. } => ErrorCategory::Request,
            AlbumError::UpstreamError(_) | AlbumError::UpstreamStatus { .. } => {
                ErrorCategory::Upstream
            }
            AlbumError::SelectorError { .. }
            | AlbumError::ConfigError { .. }
            | AlbumError::ConfigValidationError { .. }
            | AlbumError::InvalidConfigValueError { .. }
            | AlbumError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AlbumError::IoError(_) | AlbumError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 呼叫端看到的狀態碼：只有輸入錯誤是 400，其餘一律 500
    pub fn status_code(&self) -> u16 {
        match self {
            AlbumError::InvalidRequest { .. } => 400,
            _ => 500,
        }
    }

    /// 呼叫端看到的訊息，不包含底層原因
    pub fn public_message(&self) -> &'static str {
        match self {
            AlbumError::InvalidRequest { .. } => INVALID_ALBUM_URL_MESSAGE,
            _ => ALBUM_FETCH_FAILED_MESSAGE,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Request => {
                "The URL is not a supported album page (expected mp.weixin.qq.com/mp/appmsgalbum)"
                    .to_string()
            }
            ErrorCategory::Upstream => format!("Could not fetch the album page: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => "Copy the album link from the official account page and try again",
            ErrorCategory::Upstream => "Check network connectivity and that the album is still public",
            ErrorCategory::Configuration => "Review the [profile] and [http] sections of the config file",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, AlbumError>;
