// Load failure taxonomy
use thiserror::Error;

/// Everything that can go wrong while fetching the dataset.
///
/// Stored in the view state, hence `Clone` and string payloads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadFailure {
    #[error("request to {location} failed: {message}")]
    Transport { location: String, message: String },

    #[error("{location} answered with HTTP status {status}")]
    Status { location: String, status: u16 },

    #[error("could not read {location}: {message}")]
    Io { location: String, message: String },

    #[error("{location} is not a valid record array: {message}")]
    Parse { location: String, message: String },
}

impl LoadFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadFailure::Transport { .. } => "transport",
            LoadFailure::Status { .. } => "status",
            LoadFailure::Io { .. } => "io",
            LoadFailure::Parse { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let failure = LoadFailure::Status {
            location: "http://localhost/youtube_trends.json".to_string(),
            status: 404,
        };
        assert_eq!(
            failure.to_string(),
            "http://localhost/youtube_trends.json answered with HTTP status 404"
        );
        assert_eq!(failure.kind(), "status");
    }
}
