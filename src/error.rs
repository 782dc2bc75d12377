use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodzError {
    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Unknown sort method: {0}")]
    UnknownSortMethod(String),

    #[error("Unknown search method: {0}")]
    UnknownSearchMethod(String),
}

pub type Result<T> = std::result::Result<T, MoodzError>;
