use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("User directory unavailable: {0}")]
    Unavailable(String),
}
