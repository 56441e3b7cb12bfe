use super::geometry::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bounded pool of food positions.
///
/// Food is never deleted, only relocated. Once `count` reaches `capacity`,
/// new food overwrites a randomly chosen existing slot instead of growing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPool {
    pub capacity: usize,
    pub count: usize,
    pub position: Vec<Vec3>,
}

impl FoodPool {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            count: 0,
            position: vec![Vec3::ZERO; capacity],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Places food at `pos`, returning the slot written.
    ///
    /// Appends while below capacity, otherwise overwrites a random live slot.
    /// Returns `None` only for a zero-capacity pool.
    pub fn insert<R: Rng>(&mut self, pos: Vec3, rng: &mut R) -> Option<usize> {
        if self.capacity == 0 {
            return None;
        }
        let id = if self.count < self.capacity {
            self.count += 1;
            self.count - 1
        } else {
            rng.gen_range(0..self.count)
        };
        self.position[id] = pos;
        Some(id)
    }

    #[inline]
    pub fn relocate(&mut self, id: usize, pos: Vec3) {
        if id < self.count {
            self.position[id] = pos;
        }
    }

    #[must_use]
    pub fn live(&self) -> &[Vec3] {
        &self.position[..self.count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_insert_grows_until_capacity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut pool = FoodPool::new(2);
        assert_eq!(pool.insert(Vec3::new(1.0, 0.0, 0.0), &mut rng), Some(0));
        assert_eq!(pool.insert(Vec3::new(2.0, 0.0, 0.0), &mut rng), Some(1));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_overflow_overwrites_existing_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pool = FoodPool::new(3);
        for i in 0..3 {
            pool.insert(Vec3::new(i as f32, 0.0, 0.0), &mut rng);
        }
        let marker = Vec3::new(99.0, 99.0, 99.0);
        let slot = pool.insert(marker, &mut rng).unwrap();

        assert!(slot < 3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.position.len(), 3);
        assert_eq!(pool.live().iter().filter(|p| **p == marker).count(), 1);
    }

    #[test]
    fn test_zero_capacity_rejects() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut pool = FoodPool::new(0);
        assert_eq!(pool.insert(Vec3::ZERO, &mut rng), None);
    }
}
