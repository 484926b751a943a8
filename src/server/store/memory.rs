use tokio::sync::Mutex;
use crate::server::model::order::Order;
use crate::server::store::{OrderStore, StoreError};

#[derive(Default)]
pub(crate) struct MemoryStore {
    orders: Mutex<Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.lock().await.clone())
    }

    async fn append(&self, order: Order) -> Result<(), StoreError> {
        self.orders.lock().await.push(order);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.orders.lock().await.clear();
        Ok(())
    }
}
