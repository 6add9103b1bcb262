pub type VgirResult<T> = Result<T, VgirError>;

/// Errors the crate actually raises. Encoding itself is infallible; only the
/// batch writer's I/O and the manifest's JSON serialization can fail.
#[derive(thiserror::Error, Debug)]
pub enum VgirError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serde(String),
}

impl VgirError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
