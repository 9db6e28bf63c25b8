//! Tokio host for the koala's decay process.

use crate::core::constants::DECAY_INTERVAL_MS;
use crate::core::timers::Epoch;
use crate::koala::{ActionOutcome, KoalaSession, KoalaState};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub struct KoalaDriver {
    session: Arc<Mutex<KoalaSession>>,
    decay: Option<JoinHandle<()>>,
}

impl KoalaDriver {
    pub fn new(session: KoalaSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            decay: None,
        }
    }

    /// Start decaying. A second call while active is a no-op.
    pub async fn activate(&mut self) {
        let epoch = {
            let mut session = self.session.lock().await;
            if session.is_active() {
                return;
            }
            session.activate()
        };
        self.decay = Some(spawn_decay(Arc::clone(&self.session), epoch));
    }

    pub async fn deactivate(&mut self) {
        self.session.lock().await.deactivate();
        if let Some(task) = self.decay.take() {
            task.abort();
        }
    }

    pub async fn perform_action(
        &self,
        action_id: &str,
        now: DateTime<Utc>,
    ) -> Option<ActionOutcome> {
        self.session.lock().await.perform_action(action_id, now)
    }

    pub async fn snapshot(&self) -> KoalaState {
        self.session.lock().await.state().clone()
    }
}

impl Drop for KoalaDriver {
    fn drop(&mut self) {
        if let Some(task) = &self.decay {
            task.abort();
        }
    }
}

fn spawn_decay(session: Arc<Mutex<KoalaSession>>, epoch: Epoch) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(DECAY_INTERVAL_MS));
        // First tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if !session.lock().await.fire_decay(epoch) {
                break;
            }
        }
    })
}
