use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::info;
use tokio::fs;
use tokio::sync::Mutex;
use crate::server::model::order::Order;
use crate::server::store::{OrderStore, StoreError};

/// A single JSON array of orders, rewritten in full on every mutation.
pub(crate) struct FileStore {
    path: PathBuf,
    /// held across each read-modify-write
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Order>, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(vec![]),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(vec![]),
            Err(e) => Err(e.into()),
        }
    }

    /// Write next to the target, then rename over it, so readers never see a half-written file.
    async fn write(&self, orders: &[Order]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(orders)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl OrderStore for FileStore {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn append(&self, order: Order) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut orders = self.read().await?;
        orders.push(order);
        self.write(&orders).await?;
        info!("stored {} orders in {}", orders.len(), self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write(&[]).await
    }
}
