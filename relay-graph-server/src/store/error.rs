use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("StoreError - SeedTooLarge: {1} {0} do not fit in i32 ids")]
    SeedTooLarge(&'static str, usize),
    #[error("StoreError - UnknownSortKey: cannot order by '{0}'")]
    UnknownSortKey(String),
    #[error("StoreError - DanglingReference: {0} '{1}' does not exist")]
    DanglingReference(&'static str, i32),
}
