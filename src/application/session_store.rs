// In-memory session store keyed by session id
use crate::domain::session::Session;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Sessions live for the lifetime of the process; there is no persistence
/// and a restart clears them. Handlers load a session by id, apply one event
/// and store it back, so the lock is never held across outbound I/O.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session::new(Utc::now().date_naive());
        self.sessions.write().await.insert(id, session);
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    pub async fn put(&self, id: Uuid, session: Session) {
        self.sessions.write().await.insert(id, session);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
