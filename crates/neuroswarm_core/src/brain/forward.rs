use super::topology::Topology;

/// Per-evaluation scratch space holding the current and previous layer values.
///
/// One `Activations` must never be shared by two evaluations running at the
/// same time; give every worker its own.
#[derive(Debug, Clone, Default)]
pub struct Activations(pub Vec<f32>, pub Vec<f32>);

impl Activations {
    #[must_use]
    pub fn for_topology(topology: &Topology) -> Self {
        let width = topology.max_width();
        Self(Vec::with_capacity(width), Vec::with_capacity(width))
    }
}

/// Evaluates the network stored at `weights[offset..offset + brain_size]`.
///
/// Every layer is laid out as a row-major `units x fan_in` weight block
/// followed by `units` biases. Each unit computes `tanh(sum(prev * w) + bias)`.
/// The returned slice borrows `activations` and has `topology.outputs` entries.
///
/// Inputs shorter than `topology.inputs` are zero-padded.
pub fn forward_internal<'a>(
    topology: &Topology,
    inputs: &[f32],
    weights: &[f32],
    offset: usize,
    activations: &'a mut Activations,
) -> &'a [f32] {
    let prev = &mut activations.1;
    prev.clear();
    prev.extend((0..topology.inputs).map(|i| inputs.get(i).copied().unwrap_or(0.0)));

    let mut w_idx = offset;
    for (fan_in, units) in topology.layers() {
        let block = &weights[w_idx..w_idx + fan_in * units];
        let biases = &weights[w_idx + fan_in * units..w_idx + fan_in * units + units];
        w_idx += fan_in * units + units;

        let current = &mut activations.0;
        current.clear();
        for (row, &bias) in block.chunks_exact(fan_in).zip(biases) {
            let sum: f32 = row
                .iter()
                .zip(activations.1.iter())
                .map(|(w, x)| w * x)
                .sum();
            current.push((sum + bias).tanh());
        }
        std::mem::swap(&mut activations.0, &mut activations.1);
    }

    &activations.1
}

/// Allocating convenience wrapper around [`forward_internal`].
#[must_use]
pub fn forward(topology: &Topology, inputs: &[f32], weights: &[f32], offset: usize) -> Vec<f32> {
    let mut activations = Activations::for_topology(topology);
    forward_internal(topology, inputs, weights, offset, &mut activations).to_vec()
}
