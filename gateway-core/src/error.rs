use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Directory request failed: {0}")]
    Directory(#[from] reqwest::Error),

    #[error("Directory returned HTTP {0}")]
    DirectoryStatus(u16),

    #[error("Directory response could not be decoded: {0}")]
    DirectoryDecode(#[from] serde_json::Error),

    #[error("Content read failed: {0}")]
    Content(#[from] std::io::Error),

    #[error("Front matter parse error: {0}")]
    FrontMatter(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl GatewayError {
    /// Whether the failure came from the remote directory service rather
    /// than from this process.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GatewayError::Directory(_)
                | GatewayError::DirectoryStatus(_)
                | GatewayError::DirectoryDecode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
