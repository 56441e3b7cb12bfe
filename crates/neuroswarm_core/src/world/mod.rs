//! The per-tick simulation state machine.
//!
//! A [`World`] exclusively owns every entity buffer. Hosts drive it with
//! [`World::tick`] and read it through [`World::snapshot`]; nothing inside a
//! tick suspends or blocks.

mod agents;
mod commands;
mod evolution;
mod init;
mod predators;
mod update;

pub use agents::{Perception, Sighting};

use crate::brain::{Activations, NeuralController};
use crate::config::AppConfig;
use crate::pattern::FoodPattern;
use crate::snapshot::WorldSnapshot;
use crate::spatial_hash::SpatialHash;
use neuroswarm_data::{AgentStore, Bounds, FoodPool, PredatorStore};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Display color given to unmutated elites after selection.
pub const ELITE_COLOR: [f32; 3] = [0.0, 255.0, 0.0];

/// Something notable that happened during a tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum WorldEvent {
    PatternSwitched {
        pattern: FoodPattern,
    },
    Evolved {
        survivors: usize,
        best_energy: f32,
        generation: u32,
    },
    /// Fewer than two agents were alive at selection time; the population was
    /// replaced with fresh random agents.
    Extinction,
    AgentCaptured {
        predator: usize,
    },
    AgentStarved,
    FoodEaten {
        food: usize,
    },
}

pub struct World {
    pub config: AppConfig,
    pub bounds: Bounds,
    pub tick: u64,
    pub agents: AgentStore,
    pub food: FoodPool,
    pub predators: PredatorStore,
    pub brain: NeuralController,
    pub spatial_hash: SpatialHash,
    pub food_hash: SpatialHash,
    pub pattern: FoodPattern,
    pub pattern_timer: f32,
    pub epoch_timer: f32,
    rng: ChaCha8Rng,
    activations: Activations,
    input_buffer: Vec<f32>,
}

impl World {
    #[inline]
    #[must_use]
    pub fn population(&self) -> usize {
        self.agents.count
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.agents.capacity
    }

    /// Distance normalizer for food and predator inputs.
    #[inline]
    fn max_sense_distance(&self) -> f32 {
        self.bounds.max_extent() * 1.5
    }

    /// Copies the current state into an immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            bounds: self.bounds,
            agent_count: self.agents.count,
            agent_capacity: self.agents.capacity,
            agent_position: self.agents.position.clone(),
            agent_color: self.agents.color.clone(),
            agent_energy: self.agents.energy.clone(),
            agent_generation: self.agents.generation.clone(),
            food_count: self.food.count,
            food_position: self.food.position.clone(),
            predator_count: self.predators.len(),
            predator_position: self.predators.position.clone(),
            pattern: self.pattern,
            pattern_index: self.pattern.index(),
            epoch_timer: self.epoch_timer,
        }
    }
}
