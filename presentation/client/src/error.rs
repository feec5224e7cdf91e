use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client.transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("client.invalid_url: {0}")]
    InvalidUrl(String),
    /// Non-success response carrying the server's error name and message.
    #[error("{name} ({status}): {message}")]
    Status {
        status: u16,
        name: String,
        message: String,
    },
    #[error("client.decode: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
