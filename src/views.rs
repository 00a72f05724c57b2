//! Page views
//!
//! One entry per open browser page, holding its `ViewState`. Entries are
//! dropped explicitly on `close` or by the idle TTL. Each entry sits behind
//! its own mutex so a scroll and a toggle from the same page never lose an
//! update; the lock is never held across an await.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;

use crate::navigation::SectionRegistry;
use crate::site::ViewState;

#[derive(Debug, Error, PartialEq)]
#[error("page view {0} is unknown or expired")]
pub struct ViewNotFound(pub String);

type SharedView = Arc<Mutex<ViewState>>;

#[derive(Clone)]
pub struct ViewRegistry {
    views: Cache<String, SharedView>,
}

impl ViewRegistry {
    pub fn new(idle_ttl: Duration, max_capacity: u64) -> Self {
        let views = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle_ttl)
            .build();
        Self { views }
    }

    /// Start a page view in the initial state. Returns its id and a snapshot.
    pub async fn open(&self, registry: &SectionRegistry) -> (String, ViewState) {
        let state = ViewState::new(registry);
        let mut id = new_view_id();
        while self.views.contains_key(&id) {
            id = new_view_id();
        }
        self.views
            .insert(id.clone(), Arc::new(Mutex::new(state.clone())))
            .await;
        tracing::info!(view_id = %id, "page view opened");
        (id, state)
    }

    pub async fn get(&self, id: &str) -> Option<ViewState> {
        let view = self.views.get(id).await?;
        let state = view.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Some(state)
    }

    /// Apply `f` to the view's state in place.
    pub async fn update<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut ViewState) -> R,
    ) -> Result<R, ViewNotFound> {
        let view = self
            .views
            .get(id)
            .await
            .ok_or_else(|| ViewNotFound(id.to_string()))?;
        let mut state = view.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut state))
    }

    /// Drop a view. Returns whether it was still open.
    pub async fn close(&self, id: &str) -> bool {
        let existed = self.views.remove(id).await.is_some();
        if existed {
            tracing::info!(view_id = %id, "page view closed");
        }
        existed
    }

    pub fn entry_count(&self) -> u64 {
        self.views.entry_count()
    }

    pub async fn run_pending_tasks(&self) {
        self.views.run_pending_tasks().await;
    }
}

fn new_view_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}
