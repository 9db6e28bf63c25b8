//! Tokio host for a Heart Hunt session.

use crate::core::timers::Epoch;
use crate::heart_hunt::{HeartHuntEvent, HeartHuntGame, HeartHuntSession, HeartHuntTimer};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

const TIMERS: [HeartHuntTimer; 3] = [
    HeartHuntTimer::Advance,
    HeartHuntTimer::Spawn,
    HeartHuntTimer::Clock,
];

struct Shared<R> {
    session: HeartHuntSession,
    rng: R,
}

/// Runs each periodic process of a session as its own task.
///
/// Every task sleeps for its timer's current period, then fires under the
/// epoch it was spawned with. A stale fire ends the task, so a paused or
/// finished session goes quiet on its own; the driver also aborts its tasks
/// on every transition.
pub struct HeartHuntDriver<R> {
    shared: Arc<Mutex<Shared<R>>>,
    events: mpsc::UnboundedSender<HeartHuntEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl<R: Rng + Send + 'static> HeartHuntDriver<R> {
    /// Wrap a session. Events from timer fires arrive on the returned receiver.
    pub fn new(
        session: HeartHuntSession,
        rng: R,
    ) -> (Self, mpsc::UnboundedReceiver<HeartHuntEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let driver = Self {
            shared: Arc::new(Mutex::new(Shared { session, rng })),
            events,
            tasks: Vec::new(),
        };
        (driver, rx)
    }

    pub async fn start(&mut self) -> bool {
        let epoch = {
            let mut shared = self.shared.lock().await;
            if !shared.session.start() {
                return false;
            }
            shared.session.game().epoch()
        };
        self.arm(epoch);
        true
    }

    pub async fn pause(&mut self) -> bool {
        let paused = self.shared.lock().await.session.pause();
        if paused {
            self.disarm();
        }
        paused
    }

    pub async fn resume(&mut self) -> bool {
        let epoch = {
            let mut shared = self.shared.lock().await;
            if !shared.session.resume() {
                return false;
            }
            shared.session.game().epoch()
        };
        self.arm(epoch);
        true
    }

    pub async fn end(&mut self) -> Vec<HeartHuntEvent> {
        let events = self.shared.lock().await.session.end();
        self.disarm();
        events
    }

    pub async fn dismiss(&mut self) -> bool {
        self.shared.lock().await.session.dismiss()
    }

    pub async fn collect(&mut self, element_id: u64) -> Vec<HeartHuntEvent> {
        let (events, playing) = {
            let mut shared = self.shared.lock().await;
            let events = shared.session.collect(element_id);
            (events, shared.session.game().is_playing())
        };
        if !playing {
            self.disarm();
        }
        events
    }

    /// Clone of the current game state.
    pub async fn snapshot(&self) -> HeartHuntGame {
        self.shared.lock().await.session.game().clone()
    }

    pub async fn with_game<T>(&self, f: impl FnOnce(&HeartHuntGame) -> T) -> T {
        f(self.shared.lock().await.session.game())
    }

    fn arm(&mut self, epoch: Epoch) {
        self.disarm();
        for timer in TIMERS {
            let handle = spawn_timer(
                Arc::clone(&self.shared),
                self.events.clone(),
                timer,
                epoch,
            );
            self.tasks.push(handle);
        }
    }

    fn disarm(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl<R> Drop for HeartHuntDriver<R> {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn spawn_timer<R: Rng + Send + 'static>(
    shared: Arc<Mutex<Shared<R>>>,
    events: mpsc::UnboundedSender<HeartHuntEvent>,
    timer: HeartHuntTimer,
    epoch: Epoch,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            // Re-read each round: the spawn period shrinks on level-up.
            let period = shared.lock().await.session.game().timer_period_ms(timer);
            tokio::time::sleep(Duration::from_millis(period)).await;

            let mut guard = shared.lock().await;
            let Shared { session, rng } = &mut *guard;
            let Some(fired) = session.fire_timer(timer, epoch, rng) else {
                break;
            };
            for event in fired {
                let _ = events.send(event);
            }
        }
        log::debug!("{:?} task finished", timer);
    })
}
