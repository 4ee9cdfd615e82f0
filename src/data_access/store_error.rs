use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redb: {0}")]
    Redb(#[from] redb::Error),
    #[error("decode: {0}")]
    Decode(String),
    #[error("encode: {0}")]
    Encode(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
    /// A foreign key on an incoming record points nowhere.
    #[error("{entity} {id} does not exist")]
    DanglingReference { entity: &'static str, id: u64 },
    #[error("{field} '{value}' is already taken")]
    Duplicate { field: &'static str, value: String },
}

// redb 2.x has many error types. Funnel them all through redb::Error.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for StoreError {
            fn from(e: $t) -> Self { StoreError::Redb(e.into()) }
        })*
    };
}

from_redb!(
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);
