use thiserror::Error;

use crate::{
    cursor::GlobalIdError,
    registry::{RegistryError, UnresolvedTypeError},
};

#[derive(Error, Debug)]
pub enum NodeError<E> {
    #[error("NodeError - Decode: {0}")]
    Decode(#[from] GlobalIdError),
    #[error("NodeError - UnknownType: '{0}' was never registered")]
    UnknownType(String),
    #[error("NodeError - UnresolvedType: {0}")]
    UnresolvedType(#[from] UnresolvedTypeError),
    #[error("NodeError - Load: {0}")]
    Load(E),
}

impl<E> From<RegistryError<E>> for NodeError<E> {
    fn from(error: RegistryError<E>) -> Self {
        match error {
            RegistryError::UnknownType(type_name) => Self::UnknownType(type_name),
            RegistryError::Load(e) => Self::Load(e),
        }
    }
}
