//! Food distribution patterns.
//!
//! The arena cycles through a closed set of six layouts. Each is a pure
//! sampler returning one food position per call, clamped into the arena with
//! a fixed margin. In planar worlds the z coordinate is always zero.
//!
//! | Pattern  | Constants                                                        |
//! |----------|------------------------------------------------------------------|
//! | Star     | 5 arms, 0.1 rad arm spread, radius up to 0.45 × min extent, ±90 z band |
//! | Ring     | radius 0.3 × min extent + [0, 120)                               |
//! | Stripes  | 3 slabs at x = w/4, w/2, 3w/4, ±90 jitter                        |
//! | Corners  | 4 (planar) or 8 (volumetric) corners pulled to 15% / 85%, ±150 jitter |
//! | Cluster  | ±450 around the center                                           |
//! | Spiral   | radius up to 0.45 × min extent, angle 0.05·r + [0, 0.2), z ramps with r |

use neuroswarm_data::{Bounds, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

pub const STAR_ARMS: usize = 5;
pub const STAR_SPREAD: f32 = 0.1;
pub const STAR_RADIUS: f32 = 0.45;
pub const STAR_Z_BAND: f32 = 90.0;
pub const RING_RADIUS: f32 = 0.3;
pub const RING_BAND: f32 = 120.0;
pub const STRIPE_COUNT: usize = 3;
pub const STRIPE_JITTER: f32 = 90.0;
pub const CORNER_INSET: f32 = 0.15;
pub const CORNER_JITTER: f32 = 150.0;
pub const CLUSTER_JITTER: f32 = 450.0;
pub const SPIRAL_RADIUS: f32 = 0.45;
pub const SPIRAL_TIGHTNESS: f32 = 0.05;
pub const SPIRAL_JITTER: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FoodPattern {
    #[default]
    Star,
    Ring,
    Stripes,
    Corners,
    Cluster,
    Spiral,
}

impl FoodPattern {
    pub const ALL: [FoodPattern; 6] = [
        Self::Star,
        Self::Ring,
        Self::Stripes,
        Self::Corners,
        Self::Cluster,
        Self::Spiral,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The pattern that follows this one in the cycle.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Ring => "Ring",
            Self::Stripes => "Stripes",
            Self::Corners => "Corners",
            Self::Cluster => "Cluster",
            Self::Spiral => "Spiral",
        }
    }

    /// Samples one food position for this pattern.
    pub fn sample<R: Rng>(self, bounds: &Bounds, margin: f32, rng: &mut R) -> Vec3 {
        let volumetric = bounds.depth > 0.0;
        let p = match self {
            Self::Star => star(bounds, volumetric, rng),
            Self::Ring => ring(bounds, volumetric, rng),
            Self::Stripes => stripes(bounds, volumetric, rng),
            Self::Corners => corners(bounds, volumetric, rng),
            Self::Cluster => cluster(bounds, volumetric, rng),
            Self::Spiral => spiral(bounds, volumetric, rng),
        };
        let p = if volumetric { p } else { Vec3::new(p.x, p.y, 0.0) };
        bounds.clamp(p, margin)
    }
}

fn jitter<R: Rng>(rng: &mut R, half: f32) -> f32 {
    rng.gen_range(-half..=half)
}

fn min_extent(b: &Bounds, volumetric: bool) -> f32 {
    if volumetric {
        b.width.min(b.height).min(b.depth)
    } else {
        b.width.min(b.height)
    }
}

fn star<R: Rng>(b: &Bounds, volumetric: bool, rng: &mut R) -> Vec3 {
    let c = b.center();
    let arm = rng.gen_range(0..STAR_ARMS);
    let base = (arm as f32 / STAR_ARMS as f32) * TAU - FRAC_PI_2;
    let angle = base + jitter(rng, STAR_SPREAD / 2.0);
    let dist = rng.gen_range(0.0..=min_extent(b, volumetric) * STAR_RADIUS);
    let z = if volumetric {
        c.z + jitter(rng, STAR_Z_BAND)
    } else {
        0.0
    };
    Vec3::new(c.x + angle.cos() * dist, c.y + angle.sin() * dist, z)
}

fn ring<R: Rng>(b: &Bounds, volumetric: bool, rng: &mut R) -> Vec3 {
    let c = b.center();
    let r = min_extent(b, volumetric) * RING_RADIUS + rng.gen_range(0.0..RING_BAND);
    let yaw = rng.gen_range(0.0..TAU);
    if volumetric {
        // uniform direction on the sphere
        let cos_pitch = rng.gen_range(-1.0f32..=1.0);
        let sin_pitch = (1.0 - cos_pitch * cos_pitch).sqrt();
        Vec3::new(
            c.x + yaw.cos() * sin_pitch * r,
            c.y + yaw.sin() * sin_pitch * r,
            c.z + cos_pitch * r,
        )
    } else {
        Vec3::new(c.x + yaw.cos() * r, c.y + yaw.sin() * r, 0.0)
    }
}

fn stripes<R: Rng>(b: &Bounds, volumetric: bool, rng: &mut R) -> Vec3 {
    let stripe = rng.gen_range(0..STRIPE_COUNT);
    let x = (b.width / (STRIPE_COUNT + 1) as f32) * (stripe + 1) as f32
        + jitter(rng, STRIPE_JITTER);
    let y = rng.gen_range(0.0..=b.height);
    let z = if volumetric {
        rng.gen_range(0.0..=b.depth)
    } else {
        0.0
    };
    Vec3::new(x, y, z)
}

fn corners<R: Rng>(b: &Bounds, volumetric: bool, rng: &mut R) -> Vec3 {
    let count = if volumetric { 8 } else { 4 };
    let corner = rng.gen_range(0..count);
    let pull = |bit: usize, extent: f32| {
        if corner & bit == 0 {
            extent * CORNER_INSET
        } else {
            extent * (1.0 - CORNER_INSET)
        }
    };
    let (cx, cy, cz) = (pull(1, b.width), pull(2, b.height), pull(4, b.depth));
    Vec3::new(
        cx + jitter(rng, CORNER_JITTER),
        cy + jitter(rng, CORNER_JITTER),
        if volumetric {
            cz + jitter(rng, CORNER_JITTER)
        } else {
            0.0
        },
    )
}

fn cluster<R: Rng>(b: &Bounds, volumetric: bool, rng: &mut R) -> Vec3 {
    let c = b.center();
    Vec3::new(
        c.x + jitter(rng, CLUSTER_JITTER),
        c.y + jitter(rng, CLUSTER_JITTER),
        if volumetric {
            c.z + jitter(rng, CLUSTER_JITTER)
        } else {
            0.0
        },
    )
}

fn spiral<R: Rng>(b: &Bounds, volumetric: bool, rng: &mut R) -> Vec3 {
    let c = b.center();
    let max_r = b.width.min(b.height) * SPIRAL_RADIUS;
    let r = rng.gen_range(0.0..=max_r);
    let angle = r * SPIRAL_TIGHTNESS + rng.gen_range(0.0..SPIRAL_JITTER);
    let z = if volumetric && max_r > 0.0 {
        // helix: height climbs with radius
        b.depth * (r / max_r)
    } else {
        0.0
    };
    Vec3::new(c.x + angle.cos() * r, c.y + angle.sin() * r, z)
}
