use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::form::FormView;
use crate::model::{IdSource, StudentId};
use crate::store::StudentStore;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything one session owns. Handlers get it by `&mut`; nothing is global.
pub struct AppState {
    pub store: StudentStore,
    pub form: FormView,
    pub ids: IdSource,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(ids: IdSource) -> Self {
        Self {
            store: StudentStore::new(),
            form: FormView::new(),
            ids,
            started_at: Utc::now(),
        }
    }

    /// Next id from the session source that is not already taken.
    pub fn fresh_id(&mut self) -> StudentId {
        loop {
            let id = self.ids.next_id();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }
}
