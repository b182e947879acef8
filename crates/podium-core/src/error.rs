use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed leaderboard data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The HTTP status code, for non-success responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status() {
        let err = Error::Http { status: 500 };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error: status 500");

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert_eq!(Error::Io(io_err).status(), None);
    }

    #[test]
    fn test_data_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Data(_)));
    }
}
