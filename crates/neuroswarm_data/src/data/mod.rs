//! Core data structures for the Neuroswarm simulation.

pub mod agent;
pub mod food;
pub mod geometry;
pub mod predator;
