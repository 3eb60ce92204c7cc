use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("'{0}' is not a shape or a command")]
    UnknownAction(String),
    #[error("The target score must be at least 1")]
    ZeroTarget,
}
