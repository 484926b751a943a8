use crate::server::service::orders::OrderService;
use crate::server::store::Store;

/// Shared by every worker; built once so all workers see the same store.
pub(crate) struct AppState {
    pub orders: OrderService<Store>,
    pub strict_reads: bool,
    pub env_name: String,
}

impl AppState {
    pub fn new(store: Store, strict_reads: bool, env_name: String) -> Self {
        Self {
            orders: OrderService::new(store),
            strict_reads,
            env_name,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::store::memory::MemoryStore;
    use actix_web::web;
    use serde_json::json;

    #[actix_web::test]
    async fn clones_share_one_store() {
        let state = web::Data::new(AppState::new(Store::Memory(MemoryStore::new()), false, "dev".to_string()));
        let worker_a = state.clone();
        let worker_b = state.clone();

        let submission = match json!({
            "name": "Ali",
            "phone": "03001234567",
            "city": "Lahore",
            "address": "St 1",
            "items": [{"name": "Pizza", "qty": 1}],
            "total": 500,
            "payment": "cash",
        }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        worker_a.orders.append(submission).await.unwrap();
        assert_eq!(worker_b.orders.list().await.unwrap().len(), 1);
    }
}
