use thiserror::Error;

/// Coarse classification of failures, used for logging and the staleness line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The document arrived but could not be decoded into fixtures.
    Decode,
    /// The request never produced a usable response.
    Transport,
    /// A date or time string could not be parsed.
    Parse,
    /// Local configuration, file system or terminal problems.
    Local,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch fixture feed: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse fixture feed: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("Fixture feed not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("Feed server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Feed client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching feed from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("Feed is not valid JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("Feed has unexpected structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Feed is empty: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("Bundled feed unavailable: {0}")]
    BundledFeed(String),

    #[error("Fixture not found: {date} {opponent}")]
    FixtureNotFound { date: String, opponent: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn bundled_feed(msg: impl Into<String>) -> Self {
        Self::BundledFeed(msg.into())
    }

    pub fn fixture_not_found(date: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self::FixtureNotFound {
            date: date.into(),
            opponent: opponent.into(),
        }
    }

    /// Create a feed not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create a feed server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a feed client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Maps the error onto the feed failure taxonomy.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            AppError::ApiParse(_)
            | AppError::ApiMalformedJson { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::ApiNoData { .. }
            | AppError::BundledFeed(_) => FailureKind::Decode,
            AppError::ApiFetch(_)
            | AppError::ApiNotFound { .. }
            | AppError::ApiServerError { .. }
            | AppError::ApiClientError { .. }
            | AppError::NetworkTimeout { .. }
            | AppError::NetworkConnection { .. } => FailureKind::Transport,
            AppError::DateTimeParse(_) => FailureKind::Parse,
            AppError::FixtureNotFound { .. }
            | AppError::Io(_)
            | AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::Config(_)
            | AppError::LogSetup(_) => FailureKind::Local,
        }
    }
}
