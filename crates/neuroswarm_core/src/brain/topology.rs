use crate::config::BrainConfig;
use neuroswarm_data::Dimensionality;
use serde::{Deserialize, Serialize};

pub const VOLUMETRIC_INPUT_LABELS: [&str; 8] = [
    "NeighborDist",
    "FoodDist",
    "FoodYaw",
    "FoodPitch",
    "Energy",
    "PredatorDist",
    "PredatorYaw",
    "PredatorPitch",
];

pub const VOLUMETRIC_OUTPUT_LABELS: [&str; 3] = ["YawForce", "PitchForce", "SpeedForce"];

pub const PLANAR_INPUT_LABELS: [&str; 6] = [
    "NeighborDist",
    "FoodDist",
    "FoodYaw",
    "Energy",
    "PredatorDist",
    "PredatorYaw",
];

pub const PLANAR_OUTPUT_LABELS: [&str; 2] = ["TurnForce", "SpeedForce"];

/// Shape of the fixed feed-forward network: `inputs`, then `hidden_layers`
/// tanh layers of `hidden` units each, then a tanh output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub dimensionality: Dimensionality,
    pub inputs: usize,
    pub hidden: usize,
    pub hidden_layers: usize,
    pub outputs: usize,
}

impl Topology {
    #[must_use]
    pub fn new(dimensionality: Dimensionality, brain: &BrainConfig) -> Self {
        let (inputs, outputs) = match dimensionality {
            Dimensionality::Volumetric => {
                (VOLUMETRIC_INPUT_LABELS.len(), VOLUMETRIC_OUTPUT_LABELS.len())
            }
            Dimensionality::Planar => (PLANAR_INPUT_LABELS.len(), PLANAR_OUTPUT_LABELS.len()),
        };
        Self {
            dimensionality,
            inputs,
            hidden: brain.hidden_neurons,
            hidden_layers: brain.hidden_layers,
            outputs,
        }
    }

    /// `(fan_in, units)` of every weighted layer in evaluation order.
    pub fn layers(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..=self.hidden_layers).map(move |layer| {
            let fan_in = if layer == 0 { self.inputs } else { self.hidden };
            let units = if layer == self.hidden_layers {
                self.outputs
            } else {
                self.hidden
            };
            (fan_in, units)
        })
    }

    /// Number of weights and biases in one brain. Derived from the shape,
    /// never configured directly.
    #[must_use]
    pub fn brain_size(&self) -> usize {
        self.layers().map(|(fan_in, units)| fan_in * units + units).sum()
    }

    /// Widest layer, used to size evaluation scratch.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.inputs.max(self.hidden).max(self.outputs)
    }

    #[must_use]
    pub fn input_labels(&self) -> &'static [&'static str] {
        match self.dimensionality {
            Dimensionality::Volumetric => &VOLUMETRIC_INPUT_LABELS,
            Dimensionality::Planar => &PLANAR_INPUT_LABELS,
        }
    }

    #[must_use]
    pub fn output_labels(&self) -> &'static [&'static str] {
        match self.dimensionality {
            Dimensionality::Volumetric => &VOLUMETRIC_OUTPUT_LABELS,
            Dimensionality::Planar => &PLANAR_OUTPUT_LABELS,
        }
    }
}
