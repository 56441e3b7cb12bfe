//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to a `config.toml`
//! document. Every section falls back to its `Default`, which reproduces the
//! reference tuning of the engine.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 2000.0
//! height = 2000.0
//! depth = 2000.0
//! agent_capacity = 1000
//! initial_population = 1000
//! seed = 42
//! dimensionality = "volumetric"
//!
//! [evolution]
//! epoch_length = 30.0
//! mutation_rate = 0.05
//!
//! [physics]
//! step_mode = "scaled"
//! ```

use neuroswarm_data::{Bounds, Dimensionality};
use serde::{Deserialize, Serialize};

/// Arena extent, population sizing and randomness.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub dimensionality: Dimensionality,
    /// Maximum number of live agents; also the population size after evolution.
    pub agent_capacity: usize,
    pub initial_population: usize,
    /// Side length of a spatial hash cell.
    pub grid_cell_size: f32,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 9600.0,
            height: 5400.0,
            depth: 5400.0,
            dimensionality: Dimensionality::Volumetric,
            agent_capacity: 10_000,
            initial_population: 10_000,
            grid_cell_size: 50.0,
            seed: None,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let depth = if self.dimensionality.is_volumetric() {
            self.depth
        } else {
            0.0
        };
        Bounds::new(self.width, self.height, depth)
    }
}

/// Agent body, senses, locomotion and metabolism.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub size: f32,
    pub sensor_range: f32,
    pub max_energy: f32,
    /// Cell radius of the neighbor query window.
    pub neighbor_window: i32,
    pub turn_rate: f32,
    pub base_speed: f32,
    pub speed_factor: f32,
    pub spawn_speed_min: f32,
    pub spawn_speed_max: f32,
    /// Pitch is kept within `±pitch_limit` radians.
    pub pitch_limit: f32,
    pub base_metabolism: f32,
    pub speed_metabolism: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            size: 8.0,
            sensor_range: 50.0,
            max_energy: 100.0,
            neighbor_window: 1,
            turn_rate: 0.2,
            base_speed: 4.0,
            speed_factor: 2.0,
            spawn_speed_min: 4.0,
            spawn_speed_max: 8.0,
            pitch_limit: std::f32::consts::FRAC_PI_2 - 0.1,
            base_metabolism: 0.05,
            speed_metabolism: 0.05,
        }
    }
}

/// Food pool sizing, nutrition and pattern cycling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FoodConfig {
    pub initial_count: usize,
    pub max_count: usize,
    pub energy: f32,
    pub size: f32,
    /// Seconds between food pattern switches.
    pub pattern_interval: f32,
    /// Distance kept between sampled food and the arena walls.
    pub pattern_margin: f32,
    /// Cell radius of the food query window.
    pub search_window: i32,
    /// Random food items inspected when the query window is empty.
    pub fallback_samples: usize,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            initial_count: 4000,
            max_count: 10_000,
            energy: 50.0,
            size: 8.0,
            pattern_interval: 10.0,
            pattern_margin: 50.0,
            search_window: 2,
            fallback_samples: 20,
        }
    }
}

/// Predator population and pursuit.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PredatorConfig {
    /// One predator per `ratio` agents of capacity.
    pub ratio: usize,
    pub speed: f32,
    pub size: f32,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            ratio: 1000,
            speed: 3.0,
            size: 50.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Seconds between selection events.
    pub epoch_length: f32,
    pub mutation_rate: f32,
    /// Half-width of the uniform weight perturbation.
    pub mutation_amount: f32,
    /// Weights are clamped to `±weight_limit` after mutation.
    pub weight_limit: f32,
    /// Selection runs immediately whenever fewer agents than this are alive.
    pub min_population: usize,
    /// Half-width of the color jitter applied to mutated offspring.
    pub color_jitter: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            epoch_length: 30.0,
            mutation_rate: 0.05,
            mutation_amount: 0.25,
            weight_limit: 4.0,
            min_population: 10,
            color_jitter: 25.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BrainConfig {
    pub hidden_neurons: usize,
    pub hidden_layers: usize,
    /// Initial weights are drawn from `±init_range`.
    pub init_range: f32,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            hidden_neurons: 8,
            hidden_layers: 2,
            init_range: 1.0,
        }
    }
}

/// How per-tick rates relate to the elapsed time passed to `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Rates are multiplied by `dt * reference_hz`.
    #[default]
    Scaled,
    /// One full step per tick regardless of `dt`.
    Fixed,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhysicsConfig {
    pub step_mode: StepMode,
    pub reference_hz: f32,
    /// Hosts cap incoming `dt` to this many seconds.
    pub max_dt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            step_mode: StepMode::Scaled,
            reference_hz: 60.0,
            max_dt: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Multiplier applied to per-tick rates for a tick of length `dt`.
    #[must_use]
    pub fn step_scale(&self, dt: f32) -> f32 {
        match self.step_mode {
            StepMode::Scaled => dt.max(0.0) * self.reference_hz,
            StepMode::Fixed => 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub agent: AgentConfig,
    pub food: FoodConfig,
    pub predator: PredatorConfig,
    pub evolution: EvolutionConfig,
    pub brain: BrainConfig,
    pub physics: PhysicsConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let w = &self.world;
        anyhow::ensure!(
            w.width > 0.0 && w.height > 0.0,
            "World width and height must be positive"
        );
        anyhow::ensure!(
            !w.dimensionality.is_volumetric() || w.depth > 0.0,
            "World depth must be positive in volumetric mode"
        );
        anyhow::ensure!(w.agent_capacity > 0, "Agent capacity must be positive");
        anyhow::ensure!(
            w.initial_population <= w.agent_capacity,
            "Initial population exceeds agent capacity"
        );
        anyhow::ensure!(w.grid_cell_size > 0.0, "Grid cell size must be positive");
        anyhow::ensure!(
            crate::spatial_hash::SpatialHash::dimensions(w.width, w.height, w.grid_cell_size)
                .is_some(),
            "World extent needs more than {} grid cells",
            crate::spatial_hash::MAX_CELLS
        );

        let a = &self.agent;
        anyhow::ensure!(a.size >= 0.0, "Agent size must be non-negative");
        anyhow::ensure!(a.sensor_range > 0.0, "Sensor range must be positive");
        anyhow::ensure!(a.max_energy > 0.0, "Max energy must be positive");
        anyhow::ensure!(a.neighbor_window >= 0, "Neighbor window must be non-negative");
        anyhow::ensure!(
            a.spawn_speed_min >= 0.0 && a.spawn_speed_min <= a.spawn_speed_max,
            "Spawn speed range must be non-negative and ordered"
        );
        anyhow::ensure!(
            a.pitch_limit >= 0.0 && a.pitch_limit < std::f32::consts::FRAC_PI_2,
            "Pitch limit must be in [0, pi/2)"
        );
        anyhow::ensure!(
            a.base_metabolism >= 0.0 && a.speed_metabolism >= 0.0,
            "Metabolism costs must be non-negative"
        );

        let f = &self.food;
        anyhow::ensure!(
            f.initial_count <= f.max_count,
            "Initial food exceeds max food"
        );
        anyhow::ensure!(f.energy >= 0.0, "Food energy must be non-negative");
        anyhow::ensure!(f.size >= 0.0, "Food size must be non-negative");
        anyhow::ensure!(
            f.pattern_interval > 0.0,
            "Pattern interval must be positive"
        );
        anyhow::ensure!(f.pattern_margin >= 0.0, "Pattern margin must be non-negative");
        anyhow::ensure!(f.search_window >= 0, "Food search window must be non-negative");

        let p = &self.predator;
        anyhow::ensure!(p.ratio > 0, "Predator ratio must be positive");
        anyhow::ensure!(p.speed >= 0.0, "Predator speed must be non-negative");
        anyhow::ensure!(p.size >= 0.0, "Predator size must be non-negative");

        let e = &self.evolution;
        anyhow::ensure!(e.epoch_length > 0.0, "Epoch length must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&e.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            e.mutation_amount >= 0.0,
            "Mutation amount must be non-negative"
        );
        anyhow::ensure!(e.weight_limit > 0.0, "Weight limit must be positive");
        anyhow::ensure!(e.color_jitter >= 0.0, "Color jitter must be non-negative");

        let b = &self.brain;
        anyhow::ensure!(b.hidden_neurons > 0, "Hidden neurons must be positive");
        anyhow::ensure!(b.hidden_layers > 0, "At least one hidden layer is required");
        anyhow::ensure!(b.init_range >= 0.0, "Init range must be non-negative");

        let ph = &self.physics;
        anyhow::ensure!(ph.reference_hz > 0.0, "Reference rate must be positive");
        anyhow::ensure!(ph.max_dt > 0.0, "Max dt must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Digest of every behavior-relevant section, for tagging runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.food).as_bytes());
        hasher.update(format!("{:?}", self.predator).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.brain).as_bytes());
        hasher.update(format!("{:?}", self.physics).as_bytes());
        hex::encode(hasher.finalize())
    }
}
