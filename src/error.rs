pub type CapmosaicResult<T> = Result<T, CapmosaicError>;

#[derive(thiserror::Error, Debug)]
pub enum CapmosaicError {
    #[error("source read error: {0}")]
    SourceRead(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid resolution: {0}")]
    InvalidResolution(String),

    #[error("output write error: {0}")]
    OutputWrite(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CapmosaicError {
    pub fn source_read(msg: impl Into<String>) -> Self {
        Self::SourceRead(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_resolution(msg: impl Into<String>) -> Self {
        Self::InvalidResolution(msg.into())
    }

    pub fn output_write(msg: impl Into<String>) -> Self {
        Self::OutputWrite(msg.into())
    }
}
