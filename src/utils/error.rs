use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {format}: {message}")]
    ConfigParseError { format: String, message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Feed request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url} (expected {expected})")]
    UnexpectedStatusError {
        url: String,
        status: u16,
        expected: u16,
    },

    #[error("Invalid feed URL '{url}': {source}")]
    InvalidUrlError {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to parse feed response from {url}: {source}")]
    ParseError {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 錯誤分類，決定退出碼與提示訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    Parse,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::IoError(_)
            | FinderError::ConfigParseError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FinderError::TransportError(_)
            | FinderError::UnexpectedStatusError { .. }
            | FinderError::InvalidUrlError { .. } => ErrorCategory::Transport,
            FinderError::ParseError { .. } => ErrorCategory::Parse,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Transport => 2,
            ErrorCategory::Parse => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Could not load configuration: {}", self),
            ErrorCategory::Transport => format!("Could not fetch a location feed: {}", self),
            ErrorCategory::Parse => format!("A location feed returned unreadable data: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FinderError::IoError(_) => "Check that the configuration file exists and is readable",
            FinderError::ConfigParseError { .. } => {
                "Check the configuration file syntax (JSON, or TOML for .toml files)"
            }
            FinderError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the configuration file"
            }
            FinderError::MissingConfigError { .. } => {
                "Add the missing field to the configuration file"
            }
            FinderError::TransportError(_) => "Check network connectivity and the feed URL",
            FinderError::UnexpectedStatusError { .. } => {
                "The feed may be down or the URL may be wrong; try again later"
            }
            FinderError::InvalidUrlError { .. } => "Check the feed URL in the configuration file",
            FinderError::ParseError { .. } => {
                "Check that the URL serves a GeoJSON feature collection"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
