use crate::adapters::memory_store::InMemoryStore;
use crate::domain::model::Snapshot;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Loads and saves both stores as one JSON document through a [`Storage`].
pub struct SnapshotRepository<S: Storage> {
    storage: S,
}

impl<S: Storage> SnapshotRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn read(&self, path: &str) -> Result<Snapshot> {
        let bytes = self.storage.read_file(path).await?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            "Read snapshot {}: {} categories, {} questions",
            path,
            snapshot.categories.len(),
            snapshot.questions.len()
        );
        Ok(snapshot)
    }

    pub async fn load(&self, path: &str) -> Result<InMemoryStore> {
        let snapshot = self.read(path).await?;
        InMemoryStore::from_snapshot(snapshot)
    }

    pub async fn save(&self, store: &InMemoryStore, path: &str) -> Result<()> {
        let snapshot = store.snapshot().await;
        let json = serde_json::to_vec_pretty(&snapshot)?;
        self.storage.write_file(path, &json).await?;
        tracing::debug!("Wrote snapshot {} ({} bytes)", path, json.len());
        Ok(())
    }
}
