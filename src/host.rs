//! Embeddable host facade.
//!
//! A [`Simulation`] owns the [`World`] and publishes an immutable
//! [`WorldSnapshot`] behind an `Arc` after every tick or command. Readers clone
//! the `Arc` and never see the live buffers, so a renderer may hold a snapshot
//! on another thread while the next tick runs.

use neuroswarm_core::config::AppConfig;
use neuroswarm_core::{Metrics, World, WorldEvent, WorldSnapshot};
use neuroswarm_data::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Control message from the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum Command {
    /// Run one tick of `dt` seconds.
    Advance { dt: f32 },
    /// Drop `count` food items within `radius` of a point.
    SpawnFood {
        x: f32,
        y: f32,
        #[serde(default)]
        z: f32,
        count: usize,
        radius: f32,
    },
    Resize {
        width: f32,
        height: f32,
        #[serde(default)]
        depth: f32,
    },
}

pub struct Simulation {
    world: World,
    metrics: Metrics,
    snapshot: Arc<WorldSnapshot>,
    last_events: Vec<WorldEvent>,
}

impl Simulation {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let world = World::new(config)?;
        let snapshot = Arc::new(world.snapshot());
        tracing::info!(fingerprint = %world.config.fingerprint(), "Simulation started");
        Ok(Self {
            world,
            metrics: Metrics::new(),
            snapshot,
            last_events: Vec::new(),
        })
    }

    /// Builds a simulation from TOML configuration text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Self::new(AppConfig::from_toml(content)?)
    }

    /// Applies one host command.
    pub fn handle(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Advance { dt } => {
                self.step(dt);
            }
            Command::SpawnFood {
                x,
                y,
                z,
                count,
                radius,
            } => {
                self.world
                    .spawn_food_cluster(Vec3::new(x, y, z), count, radius)
                    .inspect_err(|e| tracing::warn!(error = %e, "Food cluster rejected"))?;
                self.publish();
            }
            Command::Resize {
                width,
                height,
                depth,
            } => {
                self.world
                    .resize(width, height, depth)
                    .inspect_err(|e| tracing::warn!(error = %e, "Resize rejected"))?;
                self.publish();
            }
        }
        Ok(())
    }

    /// Advances the world by `dt` seconds (capped at `physics.max_dt`) and
    /// returns the new snapshot.
    pub fn step(&mut self, dt: f32) -> Arc<WorldSnapshot> {
        let start = Instant::now();
        self.last_events = self.world.tick(dt);
        self.metrics.record_tick(
            start.elapsed(),
            self.world.population(),
            self.world.food.count,
        );
        self.metrics.record_events(&self.last_events);
        self.publish();
        Arc::clone(&self.snapshot)
    }

    /// The snapshot published at the last tick or command boundary.
    #[must_use]
    pub fn latest_snapshot(&self) -> Arc<WorldSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Events produced by the most recent tick.
    #[must_use]
    pub fn last_events(&self) -> &[WorldEvent] {
        &self.last_events
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn publish(&mut self) {
        self.snapshot = Arc::new(self.world.snapshot());
    }
}
