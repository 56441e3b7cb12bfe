use super::World;
use crate::brain::{Activations, NeuralController};
use crate::config::AppConfig;
use crate::error::SimError;
use crate::pattern::FoodPattern;
use crate::spatial_hash::SpatialHash;
use neuroswarm_data::{AgentSpawn, AgentStore, FoodPool, PredatorStore, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::{FRAC_PI_4, TAU};

impl World {
    /// Builds a world from a validated configuration.
    ///
    /// Predators, the initial food layout (first pattern) and
    /// `initial_population` random agents are created, in that order, from the
    /// seeded random source.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config
            .validate()
            .map_err(|e| SimError::InvalidConfig(e.to_string()))?;

        let mut rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };

        let bounds = config.world.bounds();
        let brain = NeuralController::from_config(&config);
        let capacity = config.world.agent_capacity;
        let cell = config.world.grid_cell_size;

        let predator_count = capacity / config.predator.ratio;
        let predators = PredatorStore::new(
            (0..predator_count)
                .map(|_| random_point(&bounds, &mut rng))
                .collect(),
        );

        // Worlds open on Star; the first timed switch moves to Ring.
        let pattern = FoodPattern::default();
        let mut food = FoodPool::new(config.food.max_count);
        for _ in 0..config.food.initial_count {
            let p = pattern.sample(&bounds, config.food.pattern_margin, &mut rng);
            food.insert(p, &mut rng);
        }

        let mut world = Self {
            bounds,
            tick: 0,
            agents: AgentStore::new(capacity, brain.brain_size()),
            food,
            predators,
            brain,
            spatial_hash: SpatialHash::new(bounds.width, bounds.height, cell, capacity),
            food_hash: SpatialHash::new(bounds.width, bounds.height, cell, config.food.max_count),
            pattern,
            pattern_timer: 0.0,
            epoch_timer: 0.0,
            rng,
            activations: Activations::for_topology(&brain.topology),
            input_buffer: Vec::with_capacity(brain.topology.inputs),
            config,
        };

        for _ in 0..world.config.world.initial_population {
            world.spawn_random_agent();
        }

        tracing::info!(
            agents = world.agents.count,
            food = world.food.count,
            predators = world.predators.len(),
            brain_size = brain.brain_size(),
            "World created"
        );
        Ok(world)
    }

    /// Spawns an agent with a random body and brain at a random position.
    pub fn spawn_random_agent(&mut self) -> Option<usize> {
        let position = random_point(&self.bounds, &mut self.rng);
        self.spawn_agent(position)
    }

    /// Spawns an agent at `position` with random heading, speed, color and
    /// brain, full energy and generation zero.
    ///
    /// Returns `None`, changing nothing, when the population is at capacity.
    pub fn spawn_agent(&mut self, position: Vec3) -> Option<usize> {
        if self.agents.is_full() {
            return None;
        }
        let cfg = &self.config.agent;
        let rng = &mut self.rng;

        let yaw = rng.gen_range(0.0..TAU);
        let pitch = if self.bounds.depth > 0.0 {
            let max = FRAC_PI_4.min(cfg.pitch_limit);
            rng.gen_range(-max..=max)
        } else {
            0.0
        };
        let speed = rng.gen_range(cfg.spawn_speed_min..=cfg.spawn_speed_max);
        let color = [
            rng.gen_range(100.0..=255.0),
            rng.gen_range(100.0..=255.0),
            255.0,
        ];

        let id = self.agents.spawn(AgentSpawn {
            position: self.bounds.clamp(position, 0.0),
            velocity: heading_vector(yaw, pitch) * speed,
            yaw,
            pitch,
            energy: cfg.max_energy,
            color,
            generation: 0,
        })?;

        let offset = id * self.brain.brain_size();
        self.brain
            .randomize(&mut self.agents.brains, offset, &mut self.rng);
        Some(id)
    }
}

/// Unit vector for a heading. Pitch is elevation above the horizontal plane.
#[inline]
pub(crate) fn heading_vector(yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    Vec3::new(cp * cy, cp * sy, sp)
}

pub(crate) fn random_point<R: Rng>(bounds: &neuroswarm_data::Bounds, rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..=bounds.width),
        rng.gen_range(0.0..=bounds.height),
        rng.gen_range(0.0..=bounds.depth),
    )
}
