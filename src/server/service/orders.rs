use derive_more::{Display, Error};
use log::{info, warn};
use serde_json::{Map, Value};
use crate::server::model::order::{self, Order, OrderSummary};
use crate::server::service::validation::{self, ValidationError};
use crate::server::store::{OrderStore, StoreError};
use crate::server::util::{id, time};

#[derive(Debug, Display, Error)]
pub(crate) enum OrderError {
    #[display("{_0}")]
    Invalid(ValidationError),
    #[display("{_0}")]
    Store(StoreError),
}

/// Validation, identity and ordering on top of an `OrderStore`.
pub(crate) struct OrderService<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All orders, newest first.
    pub async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders = self.store.list().await?;
        order::sort_newest_first(&mut orders);
        Ok(orders)
    }

    /// Validate a submission, stamp it and store it. Nothing is stored on failure.
    pub async fn append(&self, data: Map<String, Value>) -> Result<OrderSummary, OrderError> {
        let new_order = validation::validate(data).map_err(|e| {
            warn!("rejected order submission, {}", e);
            OrderError::Invalid(e)
        })?;
        let now = time::helper::get_utc_now();
        let order = new_order.into_order(id::generate_order_id(&now), now);
        let summary = order.summary();
        self.store.append(order).await.map_err(OrderError::Store)?;
        info!("order {} accepted, total={}", summary.id, summary.total);
        Ok(summary)
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.clear().await?;
        info!("all orders cleared");
        Ok(())
    }
}
