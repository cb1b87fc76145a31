use thiserror::Error;

use relay_graph::registry::InvalidRegistration;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("ApplicationError - InvalidRegistration: {0}")]
    InvalidRegistration(#[from] InvalidRegistration),
    #[error("ApplicationError - Store: {0}")]
    Store(#[from] StoreError),
}
