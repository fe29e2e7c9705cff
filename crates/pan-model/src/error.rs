use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanError {
    #[error("invalid {option} value '{value}' (expected one of: {expected})")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PanError>;
