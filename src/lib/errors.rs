use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Serialization error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}
