use thiserror::Error;

/// Errors raised by the catalog, the aggregation engine and the providers
#[derive(Debug, Error)]
pub enum MaimaiError {
    #[error("invalid plate '{0}'")]
    InvalidPlate(String),

    /// A score points at a song the supplied catalog does not contain
    #[error("song {0} is not in the catalog")]
    MissingSong(u32),

    #[error("no song catalog was supplied or cached")]
    CatalogUnavailable,

    #[error("player could not be identified: {0}")]
    PlayerNotFound(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MaimaiError>;
