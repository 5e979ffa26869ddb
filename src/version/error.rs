use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("missing commit= marker in token: {0}")]
    MissingCommitMarker(String),

    #[error("no version core found in commit suffix: {0}")]
    Uncoercible(String),

    #[error("invalid semver syntax: {0}")]
    Semver(#[from] semver::Error),
}
