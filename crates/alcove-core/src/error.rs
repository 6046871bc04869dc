use thiserror::Error;

/// A color string that is neither a known name nor valid hex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color string {input:?}")]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}
