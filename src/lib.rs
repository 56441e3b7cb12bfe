//! # Neuroswarm
//!
//! An evolving swarm of neural-network agents in a bounded arena. The engine
//! lives in [`neuroswarm_core`]; this crate wraps it in a command-driven
//! [`Simulation`] that publishes immutable snapshots for rendering hosts.

pub mod host;

pub use host::{Command, Simulation};
pub use neuroswarm_core::{init_logging, AppConfig, SimError, World, WorldEvent, WorldSnapshot};
pub use neuroswarm_data::{Bounds, Dimensionality, Vec3};
