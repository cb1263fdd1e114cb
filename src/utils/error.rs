use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Fetch failed: {url} responded with status {status}")]
    FetchError { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    Parse,
    Config,
    Io,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::FetchError { .. } | FinderError::HttpError(_) => ErrorCategory::Fetch,
            FinderError::ParseError(_) => ErrorCategory::Parse,
            FinderError::IoError(_) => ErrorCategory::Io,
            FinderError::ConfigError { .. }
            | FinderError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// 上游資料取得失敗 (非解析錯誤)
    pub fn is_fetch_failure(&self) -> bool {
        self.category() == ErrorCategory::Fetch
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FinderError::FetchError { status, .. } if *status >= 500 => {
                "The color service is having trouble; try again later"
            }
            FinderError::FetchError { .. } => {
                "Check that the endpoint URL is correct and publicly reachable"
            }
            FinderError::HttpError(_) => {
                "Check your network connection or raise --timeout"
            }
            FinderError::ParseError(_) => {
                "The endpoint must return a JSON array of {name, hex, comp} records"
            }
            FinderError::IoError(_) => "Check that the file exists and is readable",
            FinderError::ConfigError { .. } | FinderError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::FetchError { status, .. } => {
                format!("Could not load colors (server returned {})", status)
            }
            FinderError::HttpError(_) => "Could not reach the color service".to_string(),
            FinderError::ParseError(_) => "The color service returned unreadable data".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
