use super::geometry::Vec3;
use serde::{Deserialize, Serialize};

/// Fixed-size set of predators. Predators are created once and only ever move.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredatorStore {
    pub position: Vec<Vec3>,
}

impl PredatorStore {
    #[must_use]
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            position: positions,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
}
