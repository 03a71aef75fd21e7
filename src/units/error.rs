use thiserror::Error;

/// Message shown next to the input field when conversion is refused
pub const INVALID_INPUT_MESSAGE: &str = "Enter a valid numeric value.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidNumericInput,
}
