use rand::Rng;

/// Point mutation over one brain's weights.
///
/// Each weight independently, with probability `rate`, receives a uniform
/// perturbation in `[-amount, amount]` and is then clamped to `[-limit, limit]`.
pub fn mutate<R: Rng>(weights: &mut [f32], rate: f32, amount: f32, limit: f32, rng: &mut R) {
    for w in weights.iter_mut() {
        if rng.gen::<f32>() < rate {
            *w += rng.gen_range(-amount..=amount);
            *w = w.clamp(-limit, limit);
        }
    }
}

/// Fills `weights` with values drawn uniformly from `[-range, range]`.
pub fn randomize<R: Rng>(weights: &mut [f32], range: f32, rng: &mut R) {
    for w in weights.iter_mut() {
        *w = rng.gen_range(-range..=range);
    }
}
