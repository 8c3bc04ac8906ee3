/// Errors that can occur while building values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The text is not an optionally signed run of decimal digits.
    #[error("invalid bigint literal: {0:?}")]
    InvalidBigInt(String),
}

pub type Result<T> = std::result::Result<T, ValueError>;
