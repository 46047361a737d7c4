/// Simplified error system for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type ValidationResult<T> = Result<T, AppError>;
