//! Repeating timers driven by elapsed wall time.
//!
//! A [`TimerWheel`] owns a small set of keyed repeating timers. A host feeds it
//! elapsed milliseconds and pulls due timers one at a time, in chronological
//! order, so a fire that stops the wheel (e.g. the last life lost) prevents
//! every later fire of the same batch from running.
//!
//! Every start, resume and stop bumps the wheel's [`Epoch`]. Callbacks armed
//! under an older epoch (an async task that was mid-sleep when the session was
//! paused, say) compare their epoch with [`TimerWheel::is_current`] and bail.

/// Generation counter for a timer wheel's armed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    fn next(self) -> Self {
        Epoch(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone)]
struct RepeatingTimer<K> {
    key: K,
    period_ms: u64,
    until_due_ms: u64,
}

/// A set of repeating timers that fire in chronological order.
#[derive(Debug, Clone)]
pub struct TimerWheel<K> {
    timers: Vec<RepeatingTimer<K>>,
    epoch: Epoch,
    running: bool,
}

impl<K> Default for TimerWheel<K> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            epoch: Epoch::default(),
            running: false,
        }
    }
}

impl<K: Copy + PartialEq> TimerWheel<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_timer(mut self, key: K, period_ms: u64) -> Self {
        self.insert(key, period_ms);
        self
    }

    /// Add a timer, or replace the period of an existing one.
    ///
    /// Timers inserted earlier win ties when several fall due at the same
    /// instant.
    pub fn insert(&mut self, key: K, period_ms: u64) {
        let period_ms = period_ms.max(1);
        match self.timers.iter_mut().find(|t| t.key == key) {
            Some(timer) => {
                timer.period_ms = period_ms;
                timer.until_due_ms = period_ms;
            }
            None => self.timers.push(RepeatingTimer {
                key,
                period_ms,
                until_due_ms: period_ms,
            }),
        }
    }

    /// Change a timer's period without restarting the rest of the wheel.
    ///
    /// A shorter period pulls the next fire in; a longer one takes effect after
    /// the pending fire.
    pub fn set_period(&mut self, key: K, period_ms: u64) {
        let period_ms = period_ms.max(1);
        if let Some(timer) = self.timers.iter_mut().find(|t| t.key == key) {
            timer.period_ms = period_ms;
            timer.until_due_ms = timer.until_due_ms.min(period_ms);
        }
    }

    pub fn period(&self, key: K) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.period_ms)
    }

    /// Arm every timer from scratch.
    pub fn start(&mut self) -> Epoch {
        for timer in &mut self.timers {
            timer.until_due_ms = timer.period_ms;
        }
        self.running = true;
        self.epoch = self.epoch.next();
        self.epoch
    }

    /// Re-arm the timers, keeping the time each had left before the stop.
    pub fn resume(&mut self) -> Epoch {
        self.running = true;
        self.epoch = self.epoch.next();
        self.epoch
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.epoch = self.epoch.next();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// True if a callback armed under `epoch` may still act.
    pub fn is_current(&self, epoch: Epoch) -> bool {
        self.running && self.epoch == epoch
    }

    /// Pop the next timer due within `budget_ms`, consuming the time up to it.
    ///
    /// Returns `None` once nothing else is due inside the budget; the
    /// remaining budget is then credited to every timer. A stopped wheel
    /// swallows the budget.
    pub fn next_due(&mut self, budget_ms: &mut u64) -> Option<K> {
        if !self.running {
            *budget_ms = 0;
            return None;
        }

        let (index, wait) = self
            .timers
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.until_due_ms))
            .min_by_key(|&(_, wait)| wait)?;

        if wait > *budget_ms {
            for timer in &mut self.timers {
                timer.until_due_ms -= *budget_ms;
            }
            *budget_ms = 0;
            return None;
        }

        for timer in &mut self.timers {
            timer.until_due_ms -= wait;
        }
        *budget_ms -= wait;

        let timer = &mut self.timers[index];
        timer.until_due_ms = timer.period_ms;
        Some(timer.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tick {
        Fast,
        Slow,
    }

    fn drain(wheel: &mut TimerWheel<Tick>, elapsed_ms: u64) -> Vec<Tick> {
        let mut budget = elapsed_ms;
        let mut fired = Vec::new();
        while let Some(tick) = wheel.next_due(&mut budget) {
            fired.push(tick);
        }
        fired
    }

    #[test]
    fn test_stopped_wheel_fires_nothing() {
        let mut wheel = TimerWheel::new().with_timer(Tick::Fast, 10);
        assert!(drain(&mut wheel, 1000).is_empty());
    }

    #[test]
    fn test_fires_in_chronological_order() {
        let mut wheel = TimerWheel::new()
            .with_timer(Tick::Fast, 30)
            .with_timer(Tick::Slow, 50);
        wheel.start();

        let fired = drain(&mut wheel, 100);
        // 30 F, 50 S, 60 F, 90 F, 100 S
        assert_eq!(
            fired,
            vec![Tick::Fast, Tick::Slow, Tick::Fast, Tick::Fast, Tick::Slow]
        );
    }

    #[test]
    fn test_insertion_order_breaks_ties() {
        let mut wheel = TimerWheel::new()
            .with_timer(Tick::Fast, 20)
            .with_timer(Tick::Slow, 20);
        wheel.start();
        assert_eq!(drain(&mut wheel, 20), vec![Tick::Fast, Tick::Slow]);
    }

    #[test]
    fn test_partial_budget_carries_over() {
        let mut wheel = TimerWheel::new().with_timer(Tick::Fast, 30);
        wheel.start();

        assert!(drain(&mut wheel, 20).is_empty());
        assert_eq!(drain(&mut wheel, 10), vec![Tick::Fast]);
    }

    #[test]
    fn test_stop_mid_batch_discards_rest() {
        let mut wheel = TimerWheel::new().with_timer(Tick::Fast, 10);
        wheel.start();

        let mut budget = 100;
        assert_eq!(wheel.next_due(&mut budget), Some(Tick::Fast));
        wheel.stop();
        assert_eq!(wheel.next_due(&mut budget), None);
        assert_eq!(budget, 0);
    }

    #[test]
    fn test_resume_keeps_remaining_time() {
        let mut wheel = TimerWheel::new().with_timer(Tick::Slow, 100);
        wheel.start();
        assert!(drain(&mut wheel, 70).is_empty());

        wheel.stop();
        wheel.resume();
        assert_eq!(drain(&mut wheel, 30), vec![Tick::Slow]);
    }

    #[test]
    fn test_start_resets_remaining_time() {
        let mut wheel = TimerWheel::new().with_timer(Tick::Slow, 100);
        wheel.start();
        assert!(drain(&mut wheel, 70).is_empty());

        wheel.start();
        assert!(drain(&mut wheel, 30).is_empty());
        assert_eq!(drain(&mut wheel, 70), vec![Tick::Slow]);
    }

    #[test]
    fn test_epoch_changes_on_every_transition() {
        let mut wheel: TimerWheel<Tick> = TimerWheel::new();
        let first = wheel.start();
        assert!(wheel.is_current(first));

        wheel.stop();
        assert!(!wheel.is_current(first));

        let second = wheel.resume();
        assert_ne!(first, second);
        assert!(!wheel.is_current(first));
        assert!(wheel.is_current(second));
    }

    #[test]
    fn test_set_period_shortens_pending_wait() {
        let mut wheel = TimerWheel::new().with_timer(Tick::Slow, 600);
        wheel.start();
        wheel.set_period(Tick::Slow, 100);
        assert_eq!(wheel.period(Tick::Slow), Some(100));
        assert_eq!(drain(&mut wheel, 100), vec![Tick::Slow]);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let wheel = TimerWheel::new().with_timer(Tick::Fast, 0);
        assert_eq!(wheel.period(Tick::Fast), Some(1));
    }
}
