//! # Neuroswarm Data
//!
//! Plain data shared by the simulation engine and its hosts: vector math,
//! dimensionality, and the dense per-kind entity stores.
//!
//! Entities are addressed by dense indices. Removal is swap-remove, so an
//! index is only meaningful until the next operation that may kill an entity.

pub mod data;

pub use data::agent::{AgentSpawn, AgentStore};
pub use data::food::FoodPool;
pub use data::geometry::{Bounds, Dimensionality, Vec3};
pub use data::predator::PredatorStore;
