//! In-memory list of therapies received from healthcare
//!
//! Writers take the write lock for the whole append or replace; readers get
//! a cloned snapshot and never hold the lock across an await.

use campus_shared::TherapyData;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct TherapyCache {
    inner: Arc<RwLock<Vec<TherapyData>>>,
}

impl TherapyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, therapy: TherapyData) {
        self.inner.write().await.push(therapy);
    }

    pub async fn extend(&self, therapies: impl IntoIterator<Item = TherapyData>) {
        self.inner.write().await.extend(therapies);
    }

    /// Replace the whole list with an empty one
    pub async fn clear(&self) {
        *self.inner.write().await = Vec::new();
    }

    pub async fn snapshot(&self) -> Vec<TherapyData> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
