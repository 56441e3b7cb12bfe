//! Run metrics and structured logging.
//!
//! The simulation itself only emits `tracing` events; hosts decide whether a
//! subscriber is installed.

use crate::world::WorldEvent;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Ticks between periodic progress log lines.
pub const LOG_INTERVAL: u64 = 1000;

/// Tick and event counters for a running simulation.
pub struct Metrics {
    tick_count: AtomicU64,
    agent_count: AtomicU64,
    food_count: AtomicU64,
    busy_nanos: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            agent_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its wall-clock duration.
    pub fn record_tick(&self, duration: Duration, agents: usize, food: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.agent_count.store(agents as u64, Ordering::Relaxed);
        self.food_count.store(food as u64, Ordering::Relaxed);
        self.busy_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if tick % LOG_INTERVAL == 0 {
            tracing::info!(
                tick,
                agents,
                food,
                duration_us = duration.as_micros() as u64,
                mean_tick_us = self.mean_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Counts each event under its variant name.
    pub fn record_events(&self, events: &[WorldEvent]) {
        for event in events {
            self.increment_counter(event_name(event));
        }
    }

    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value of a named counter; zero if never incremented.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    /// Average time spent inside a tick.
    #[must_use]
    pub fn mean_tick(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed) / ticks)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

fn event_name(event: &WorldEvent) -> &'static str {
    match event {
        WorldEvent::PatternSwitched { .. } => "pattern_switches",
        WorldEvent::Evolved { .. } => "evolutions",
        WorldEvent::Extinction => "extinctions",
        WorldEvent::AgentCaptured { .. } => "captures",
        WorldEvent::AgentStarved => "starvations",
        WorldEvent::FoodEaten { .. } => "food_eaten",
    }
}

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`
/// (default `info`). Does nothing if one is already installed.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.mean_tick(), Duration::ZERO);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        metrics.record_tick(Duration::from_millis(4), 100, 50);
        metrics.record_tick(Duration::from_millis(2), 90, 50);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.agent_count(), 90);
        assert_eq!(metrics.food_count(), 50);
        assert_eq!(metrics.mean_tick(), Duration::from_millis(3));
    }

    #[test]
    fn test_record_events() {
        let metrics = Metrics::new();
        metrics.record_events(&[
            WorldEvent::AgentStarved,
            WorldEvent::FoodEaten { food: 3 },
            WorldEvent::AgentStarved,
        ]);
        assert_eq!(metrics.counter("starvations"), 2);
        assert_eq!(metrics.counter("food_eaten"), 1);
        assert_eq!(metrics.counter("extinctions"), 0);
    }
}
