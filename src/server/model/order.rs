use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::server::util::time::{self, iso_millis};

pub(crate) const STATUS_PENDING: &str = "pending";

/// Keys the server owns; a submission can never set them.
pub(crate) const RESERVED_FIELDS: [&str; 4] = ["id", "status", "timestamp", "createdAt"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub items: Vec<Value>,
    pub total: Value,
    pub payment: String,
    pub status: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub created_at: String,
    /// any other fields the customer submitted, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id.clone(),
            timestamp: self.timestamp,
            total: self.total.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OrderSummary {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub total: Value,
}

/// A submission that passed validation but has no identity yet.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewOrder {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub items: Vec<Value>,
    pub total: Value,
    pub payment: String,
    pub extra: Map<String, Value>,
}

impl NewOrder {
    /// `now` is cut to milliseconds so the sort key matches the serialized `timestamp`.
    pub fn into_order(self, id: String, now: DateTime<Utc>) -> Order {
        let now = now.trunc_subsecs(3);
        Order {
            id,
            name: self.name,
            phone: self.phone,
            city: self.city,
            address: self.address,
            items: self.items,
            total: self.total,
            payment: self.payment,
            status: STATUS_PENDING.to_string(),
            timestamp: now,
            created_at: time::to_storefront_local(&now),
            extra: self.extra,
        }
    }
}

/// Newest first. The sort is stable, so equal timestamps keep insertion order.
pub(crate) fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
