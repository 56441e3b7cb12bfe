use super::World;
use crate::error::{Result, SimError};
use crate::spatial_hash::SpatialHash;
use neuroswarm_data::{Bounds, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

impl World {
    /// Inserts up to `count` food items scattered uniformly within `radius`
    /// of `center`. Points are clamped into the arena.
    ///
    /// Returns how many items were placed. When the pool is full, each insert
    /// overwrites a random existing item.
    pub fn spawn_food_cluster(&mut self, center: Vec3, count: usize, radius: f32) -> Result<usize> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::invalid_command(format!(
                "food cluster radius must be finite and non-negative, got {radius}"
            )));
        }
        if ![center.x, center.y, center.z].iter().all(|v| v.is_finite()) {
            return Err(SimError::invalid_command("food cluster center must be finite"));
        }

        let volumetric = self.bounds.depth > 0.0;
        let mut placed = 0;
        for _ in 0..count {
            let offset = scatter(radius, volumetric, &mut self.rng);
            let p = self.bounds.clamp(center + offset, 0.0);
            if self.food.insert(p, &mut self.rng).is_some() {
                placed += 1;
            }
        }

        tracing::debug!(placed, total = self.food.count, "Food cluster spawned");
        Ok(placed)
    }

    /// Changes the arena size.
    ///
    /// Both grids are rebuilt for the new extent and every agent, food item and
    /// predator is clamped inside it. Planar worlds ignore `depth`. Extents
    /// whose grid would exceed [`MAX_CELLS`](crate::spatial_hash::MAX_CELLS)
    /// are rejected.
    pub fn resize(&mut self, width: f32, height: f32, depth: f32) -> Result<()> {
        let volumetric = self.config.world.dimensionality.is_volumetric();
        let depth = if volumetric { depth } else { 0.0 };
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let cell = self.config.world.grid_cell_size;
        if !(positive(width) && positive(height) && (positive(depth) || !volumetric))
            || SpatialHash::dimensions(width, height, cell).is_none()
        {
            return Err(SimError::InvalidBounds {
                width,
                height,
                depth,
            });
        }

        let bounds = Bounds::new(width, height, depth);
        self.bounds = bounds;
        self.config.world.width = width;
        self.config.world.height = height;
        self.config.world.depth = depth;
        self.spatial_hash.resize(width, height);
        self.food_hash.resize(width, height);

        let live = self.agents.count;
        for p in &mut self.agents.position[..live] {
            *p = bounds.clamp(*p, 0.0);
        }
        let food = self.food.count;
        for p in &mut self.food.position[..food] {
            *p = bounds.clamp(*p, 0.0);
        }
        for p in &mut self.predators.position {
            *p = bounds.clamp(*p, 0.0);
        }
        self.rebuild_spatial_hashes();

        tracing::info!(width, height, depth, "World resized");
        Ok(())
    }

    /// Removes a living agent by index (swap-remove).
    pub fn kill_agent(&mut self, index: usize) -> Result<()> {
        if index >= self.agents.count {
            return Err(SimError::IndexOutOfRange {
                index,
                count: self.agents.count,
            });
        }
        self.agents.kill(index);
        Ok(())
    }
}

/// Uniform point in a ball (or disc) of `radius`.
fn scatter<R: Rng>(radius: f32, volumetric: bool, rng: &mut R) -> Vec3 {
    if radius == 0.0 {
        return Vec3::ZERO;
    }
    let theta = rng.gen_range(0.0..TAU);
    if volumetric {
        let r = radius * rng.gen::<f32>().cbrt();
        let cos_phi: f32 = rng.gen_range(-1.0..=1.0);
        let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
        Vec3::new(
            r * sin_phi * theta.cos(),
            r * sin_phi * theta.sin(),
            r * cos_phi,
        )
    } else {
        let r = radius * rng.gen::<f32>().sqrt();
        Vec3::new(r * theta.cos(), r * theta.sin(), 0.0)
    }
}
