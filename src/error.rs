use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// The service-status computations themselves are total; the only fallible
/// surface is resolving a vehicle model by name.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown vehicle model: {0}")]
    UnknownModel(String),
}
