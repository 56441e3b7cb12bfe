//! # Neuroswarm Core
//!
//! The simulation engine: a bounded arena of agents that sense food,
//! neighbors and predators, steer with a small fixed-topology neural network,
//! and are periodically replaced by mutated clones of the fittest half.
//!
//! This crate contains:
//! - Uniform-grid spatial hashing for broad-phase neighbor and food queries
//! - Flat-buffer neural controllers (forward pass, mutation, random init)
//! - Food distribution patterns
//! - The per-tick world state machine, predators and elitist selection
//! - Configuration, errors, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use neuroswarm_core::config::AppConfig;
//! use neuroswarm_core::World;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! config.world.agent_capacity = 200;
//! config.world.initial_population = 200;
//! config.food.initial_count = 100;
//!
//! let mut world = World::new(config).unwrap();
//! for _ in 0..10 {
//!     world.tick(1.0 / 60.0);
//! }
//! let snapshot = world.snapshot();
//! assert!(snapshot.agent_count <= snapshot.agent_capacity);
//! ```

/// Flat-buffer neural controllers
pub mod brain;
/// Configuration management for simulation parameters
pub mod config;
pub mod error;
/// Tick metrics and logging setup
pub mod metrics;
/// Food distribution patterns
pub mod pattern;
/// Immutable world copies for hosts and renderers
pub mod snapshot;
/// Spatial hashing for O(1) proximity queries
pub mod spatial_hash;
/// The per-tick simulation state machine
pub mod world;

pub use brain::{Activations, NeuralController, Topology};
pub use config::AppConfig;
pub use error::SimError;
pub use metrics::{init_logging, Metrics};
pub use pattern::FoodPattern;
pub use snapshot::WorldSnapshot;
pub use spatial_hash::SpatialHash;
pub use world::{World, WorldEvent};
