use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain one resource from the data source.
///
/// These never escape [`crate::client::PokeApi`]: they are logged and turned
/// into a missing data point for the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure, timeout or non-2xx status
    #[error("HTTP error while requesting {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The data source has nothing at this locator
    #[error("no resource found at {0}")]
    NotFound(String),
    /// The payload did not match the expected record shape
    #[error("malformed payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A routine whose prerequisite resource could not be obtained at all.
///
/// The `Display` text is the sentence written into the report in place of the answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Could not retrieve the {0} information.")]
    Unavailable(String),
    #[error("Could not find the species {0}.")]
    SpeciesNotFound(String),
}

/// Errors related to reading the optional config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Type alias for Results using QueryError
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_sentences() {
        assert_eq!(
            QueryError::Unavailable("Fire type".to_string()).to_string(),
            "Could not retrieve the Fire type information."
        );
        assert_eq!(
            QueryError::SpeciesNotFound("Missingno".to_string()).to_string(),
            "Could not find the species Missingno."
        );
    }
}
