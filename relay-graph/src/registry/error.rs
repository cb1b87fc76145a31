use thiserror::Error;

use crate::cursor::GlobalIdError;

#[derive(Error, Debug)]
pub enum RegistryError<E> {
    #[error("RegistryError - UnknownType: '{0}' was never registered")]
    UnknownType(String),
    #[error("RegistryError - Load: {0}")]
    Load(E),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("RegistryError - InvalidRegistration: {0}")]
pub struct InvalidRegistration(#[from] pub GlobalIdError);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("UnresolvedTypeError: node of type '{0}' does not belong to any registered type")]
pub struct UnresolvedTypeError(pub &'static str);
