use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("CursorError - Malformed: '{0}' is not a valid cursor")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlobalIdError {
    #[error("GlobalIdError - EmptyTypeName")]
    EmptyTypeName,
    #[error("GlobalIdError - InvalidTypeName: '{0}' must not contain ':'")]
    InvalidTypeName(String),
    #[error("GlobalIdError - NotBase64: '{0}'")]
    NotBase64(String),
    #[error("GlobalIdError - NotUtf8: '{0}'")]
    NotUtf8(String),
    #[error("GlobalIdError - MissingSeparator: '{0}'")]
    MissingSeparator(String),
}
