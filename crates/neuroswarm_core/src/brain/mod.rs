pub mod forward;
pub mod mutation;
pub mod topology;

pub use forward::Activations;
pub use topology::Topology;

use crate::config::AppConfig;
use rand::Rng;

/// Stateless evaluator and mutation operator for the fixed-topology network.
///
/// Brains are not owned here: every call addresses one brain inside a shared
/// flat weight buffer by its `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuralController {
    pub topology: Topology,
    pub mutation_amount: f32,
    pub weight_limit: f32,
    pub init_range: f32,
}

impl NeuralController {
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            mutation_amount: 0.25,
            weight_limit: 4.0,
            init_range: 1.0,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            topology: Topology::new(config.world.dimensionality, &config.brain),
            mutation_amount: config.evolution.mutation_amount,
            weight_limit: config.evolution.weight_limit,
            init_range: config.brain.init_range,
        }
    }

    #[inline]
    #[must_use]
    pub fn brain_size(&self) -> usize {
        self.topology.brain_size()
    }

    /// Runs one forward pass, returning `topology.outputs` values in `[-1, 1]`.
    #[inline]
    pub fn compute<'a>(
        &self,
        inputs: &[f32],
        weights: &[f32],
        offset: usize,
        activations: &'a mut Activations,
    ) -> &'a [f32] {
        forward::forward_internal(&self.topology, inputs, weights, offset, activations)
    }

    #[must_use]
    pub fn forward(&self, inputs: &[f32], weights: &[f32], offset: usize) -> Vec<f32> {
        forward::forward(&self.topology, inputs, weights, offset)
    }

    /// Mutates the brain at `offset` with per-weight probability `rate`.
    pub fn mutate<R: Rng>(&self, weights: &mut [f32], offset: usize, rate: f32, rng: &mut R) {
        let brain = &mut weights[offset..offset + self.brain_size()];
        mutation::mutate(brain, rate, self.mutation_amount, self.weight_limit, rng);
    }

    pub fn randomize<R: Rng>(&self, weights: &mut [f32], offset: usize, rng: &mut R) {
        let brain = &mut weights[offset..offset + self.brain_size()];
        mutation::randomize(brain, self.init_range, rng);
    }
}
