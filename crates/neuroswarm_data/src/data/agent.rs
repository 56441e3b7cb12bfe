use super::geometry::Vec3;
use serde::{Deserialize, Serialize};

/// Initial body state of a newly spawned agent.
///
/// The brain is not part of the body; spawn leaves the slot's brain weights to
/// be written by the caller through [`AgentStore::brain_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSpawn {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub energy: f32,
    pub color: [f32; 3],
    pub generation: u32,
}

/// Dense structure-of-arrays storage for agents.
///
/// Live agents occupy `0..count`; every buffer is sized to `capacity` up front
/// and never grows. `brains` is one flat buffer holding `brain_size` weights
/// per slot, agent `i` owning `brains[i * brain_size..(i + 1) * brain_size]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStore {
    pub capacity: usize,
    pub count: usize,
    pub brain_size: usize,
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    pub yaw: Vec<f32>,
    pub pitch: Vec<f32>,
    pub energy: Vec<f32>,
    pub color: Vec<[f32; 3]>,
    pub generation: Vec<u32>,
    pub brains: Vec<f32>,
}

impl AgentStore {
    #[must_use]
    pub fn new(capacity: usize, brain_size: usize) -> Self {
        Self {
            capacity,
            count: 0,
            brain_size,
            position: vec![Vec3::ZERO; capacity],
            velocity: vec![Vec3::ZERO; capacity],
            yaw: vec![0.0; capacity],
            pitch: vec![0.0; capacity],
            energy: vec![0.0; capacity],
            color: vec![[0.0; 3]; capacity],
            generation: vec![0; capacity],
            brains: vec![0.0; capacity * brain_size],
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

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    /// Appends an agent at index `count`.
    ///
    /// Returns `None` without touching any buffer when the store is full.
    pub fn spawn(&mut self, body: AgentSpawn) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let id = self.count;
        self.count += 1;

        self.position[id] = body.position;
        self.velocity[id] = body.velocity;
        self.yaw[id] = body.yaw;
        self.pitch[id] = body.pitch;
        self.energy[id] = body.energy;
        self.color[id] = body.color;
        self.generation[id] = body.generation;
        Some(id)
    }

    /// Removes agent `id` by moving the last live agent into its slot.
    ///
    /// Any index held across this call may now refer to a different agent.
    /// Out-of-range ids are ignored.
    pub fn kill(&mut self, id: usize) {
        if id >= self.count {
            return;
        }
        let last = self.count - 1;
        if id != last {
            self.position[id] = self.position[last];
            self.velocity[id] = self.velocity[last];
            self.yaw[id] = self.yaw[last];
            self.pitch[id] = self.pitch[last];
            self.energy[id] = self.energy[last];
            self.color[id] = self.color[last];
            self.generation[id] = self.generation[last];

            let n = self.brain_size;
            self.brains
                .copy_within(last * n..(last + 1) * n, id * n);
        }
        self.count -= 1;
    }

    /// Drops every live agent. Buffers keep their contents and capacity.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline]
    #[must_use]
    pub fn brain(&self, id: usize) -> &[f32] {
        let n = self.brain_size;
        &self.brains[id * n..(id + 1) * n]
    }

    #[inline]
    pub fn brain_mut(&mut self, id: usize) -> &mut [f32] {
        let n = self.brain_size;
        &mut self.brains[id * n..(id + 1) * n]
    }

    /// Live slice of energies.
    #[must_use]
    pub fn live_energy(&self) -> &[f32] {
        &self.energy[..self.count]
    }
}
