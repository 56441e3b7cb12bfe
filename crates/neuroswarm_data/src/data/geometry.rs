use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// World position, velocity or offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Unit vector in the same direction, or `None` for a zero-length or
    /// non-finite vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self * (1.0 / len))
        } else {
            None
        }
    }

    /// Length of the (x, y) projection.
    #[inline]
    #[must_use]
    pub fn planar_length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Whether the arena has a vertical axis.
///
/// `Planar` pins every z coordinate to zero and drops the pitch inputs and
/// outputs of the network; `Volumetric` is the full form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimensionality {
    Planar,
    #[default]
    Volumetric,
}

impl Dimensionality {
    #[must_use]
    pub fn is_volumetric(self) -> bool {
        matches!(self, Self::Volumetric)
    }
}

/// Axis-aligned arena extent, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }

    /// Largest axis extent. Used as the "nothing sensed" distance.
    #[must_use]
    pub fn max_extent(&self) -> f32 {
        self.width.max(self.height).max(self.depth)
    }

    /// Clamps `p` into `[margin, extent - margin]` on every axis. A margin
    /// larger than half an axis collapses that axis to its midpoint.
    #[must_use]
    pub fn clamp(&self, p: Vec3, margin: f32) -> Vec3 {
        Vec3::new(
            clamp_axis(p.x, self.width, margin),
            clamp_axis(p.y, self.height, margin),
            clamp_axis(p.z, self.depth, margin),
        )
    }

    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        (0.0..=self.width).contains(&p.x)
            && (0.0..=self.height).contains(&p.y)
            && (0.0..=self.depth).contains(&p.z)
    }
}

fn clamp_axis(v: f32, extent: f32, margin: f32) -> f32 {
    let lo = margin.min(extent / 2.0);
    let hi = (extent - margin).max(extent / 2.0);
    v.clamp(lo, hi)
}
