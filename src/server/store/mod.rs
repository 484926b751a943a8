//! order persistence behind a `list / append / clear` interface

pub(crate) mod file;
pub(crate) mod memory;

use std::future::Future;
use derive_more::{Display, Error};
use crate::server::model::order::Order;
use crate::server::store::file::FileStore;
use crate::server::store::memory::MemoryStore;

#[derive(Debug, Display, Error)]
pub(crate) enum StoreError {
    #[display("failed to access order storage: {_0}")]
    Io(std::io::Error),
    #[display("order storage holds malformed data: {_0}")]
    Serde(serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e)
    }
}

/// Holds the authoritative list of orders. Implementations serialize their
/// mutations, so concurrent appends never drop an entry.
pub(crate) trait OrderStore: Send + Sync + 'static {
    /// every order, in insertion order
    fn list(&self) -> impl Future<Output = Result<Vec<Order>, StoreError>> + Send;

    fn append(&self, order: Order) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// drop every order; clearing an empty store is a no-op
    fn clear(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Backend picked at startup.
pub(crate) enum Store {
    Memory(MemoryStore),
    File(FileStore),
}

impl OrderStore for Store {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        match self {
            Store::Memory(store) => store.list().await,
            Store::File(store) => store.list().await,
        }
    }

    async fn append(&self, order: Order) -> Result<(), StoreError> {
        match self {
            Store::Memory(store) => store.append(order).await,
            Store::File(store) => store.append(order).await,
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match self {
            Store::Memory(store) => store.clear().await,
            Store::File(store) => store.clear().await,
        }
    }
}
