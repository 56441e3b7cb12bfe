use crate::pattern::FoodPattern;
use neuroswarm_data::{Bounds, Vec3};
use serde::{Deserialize, Serialize};

/// Immutable copy of the world taken at a tick boundary.
///
/// Agent buffers are sized to capacity and food buffers to the food pool
/// capacity; only the first `agent_count` / `food_count` entries are valid.
/// A snapshot shares nothing with the live world, so it can be handed to a
/// renderer on another thread.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub bounds: Bounds,
    pub agent_count: usize,
    pub agent_capacity: usize,
    pub agent_position: Vec<Vec3>,
    pub agent_color: Vec<[f32; 3]>,
    pub agent_energy: Vec<f32>,
    pub agent_generation: Vec<u32>,
    pub food_count: usize,
    pub food_position: Vec<Vec3>,
    pub predator_count: usize,
    pub predator_position: Vec<Vec3>,
    pub pattern: FoodPattern,
    pub pattern_index: usize,
    pub epoch_timer: f32,
}

impl WorldSnapshot {
    #[must_use]
    pub fn agents(&self) -> &[Vec3] {
        &self.agent_position[..self.agent_count]
    }

    #[must_use]
    pub fn food(&self) -> &[Vec3] {
        &self.food_position[..self.food_count]
    }

    /// Highest generation among living agents.
    #[must_use]
    pub fn max_generation(&self) -> u32 {
        self.agent_generation[..self.agent_count]
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Mean energy of living agents, zero for an empty population.
    #[must_use]
    pub fn mean_energy(&self) -> f32 {
        if self.agent_count == 0 {
            return 0.0;
        }
        self.agent_energy[..self.agent_count].iter().sum::<f32>() / self.agent_count as f32
    }
}
