use super::init::heading_vector;
use super::{World, WorldEvent};
use neuroswarm_data::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// A sensed entity: its index, exact distance and offset from the sensing agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: usize,
    pub distance: f32,
    pub offset: Vec3,
}

/// Everything one agent senses at the start of its update.
///
/// When nothing is found, the sighting is `None` and the matching distance is
/// the largest world extent, never a stale value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perception {
    /// Distance to the nearest other agent, capped at the sensor range.
    pub neighbor_distance: f32,
    pub food: Option<Sighting>,
    pub food_distance: f32,
    pub predator: Option<Sighting>,
    pub predator_distance: f32,
}

/// Heading-relative bearing to `offset`, each component in `[-1, 1]`.
///
/// Returns `(yaw, pitch)`; pitch is zero in planar worlds.
#[must_use]
pub fn bearing(offset: Vec3, yaw: f32, pitch: f32, volumetric: bool) -> (f32, f32) {
    let yaw_to = offset.y.atan2(offset.x);
    let yaw_b = wrap_angle(yaw_to - yaw) / PI;
    let pitch_b = if volumetric {
        let pitch_to = offset.z.atan2(offset.planar_length());
        ((pitch_to - pitch) / PI).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    (yaw_b, pitch_b)
}

/// Wraps an angle into `[-PI, PI]`.
#[inline]
fn wrap_angle(a: f32) -> f32 {
    let a = (a + PI).rem_euclid(TAU) - PI;
    if a.is_finite() {
        a
    } else {
        0.0
    }
}

impl World {
    /// Runs the sensing step for agent `i`.
    ///
    /// Neighbors and food are found through their spatial hashes; when the food
    /// window is empty a fixed-size random sample of all food is inspected
    /// instead. Predators are scanned exhaustively.
    pub fn sense(&mut self, i: usize) -> Perception {
        let sentinel = self.bounds.max_extent();
        let food = self.nearest_food(i);
        let predator = self.nearest_predator(i);
        Perception {
            neighbor_distance: self.nearest_neighbor_distance(i),
            food_distance: food.map_or(sentinel, |s| s.distance),
            food,
            predator_distance: predator.map_or(sentinel, |s| s.distance),
            predator,
        }
    }

    fn nearest_neighbor_distance(&self, i: usize) -> f32 {
        let range = self.config.agent.sensor_range;
        let me = self.agents.position[i];
        let count = self.agents.count;
        let mut min_sq = range * range;
        let mut found = false;

        self.spatial_hash
            .query_callback(me.x, me.y, self.config.agent.neighbor_window, |j| {
                if j == i || j >= count {
                    return;
                }
                let d = me.distance_squared(self.agents.position[j]);
                if d < min_sq {
                    min_sq = d;
                    found = true;
                }
            });

        if found {
            min_sq.sqrt()
        } else {
            range
        }
    }

    fn nearest_food(&mut self, i: usize) -> Option<Sighting> {
        let me = self.agents.position[i];
        let mut best: Option<(usize, f32)> = None;
        let consider = |id: usize, pos: Vec3, best: &mut Option<(usize, f32)>| {
            let d = me.distance_squared(pos);
            if best.map_or(true, |(_, bd)| d < bd) {
                *best = Some((id, d));
            }
        };

        let food = &self.food;
        self.food_hash
            .query_callback(me.x, me.y, self.config.food.search_window, |id| {
                if id < food.count {
                    consider(id, food.position[id], &mut best);
                }
            });

        if best.is_none() && !self.food.is_empty() {
            for _ in 0..self.config.food.fallback_samples {
                let id = self.rng.gen_range(0..self.food.count);
                consider(id, self.food.position[id], &mut best);
            }
        }

        best.map(|(id, d)| Sighting {
            id,
            distance: d.sqrt(),
            offset: self.food.position[id] - me,
        })
    }

    fn nearest_predator(&self, i: usize) -> Option<Sighting> {
        let me = self.agents.position[i];
        let mut best: Option<(usize, f32)> = None;
        for (id, pos) in self.predators.position.iter().enumerate() {
            let d = me.distance_squared(*pos);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((id, d));
            }
        }
        best.map(|(id, d)| Sighting {
            id,
            distance: d.sqrt(),
            offset: self.predators.position[id] - me,
        })
    }

    /// Updates every living agent in index order.
    ///
    /// A dead agent's slot is refilled by swap-remove, so the cursor stays put
    /// and the agent moved into that slot is processed this same tick.
    pub(super) fn update_agents(&mut self, scale: f32, events: &mut Vec<WorldEvent>) {
        let mut i = 0;
        while i < self.agents.count {
            if !self.step_agent(i, scale, events) {
                i += 1;
            }
        }
    }

    /// Sense, decide, move, feed, bounce and pay metabolism for agent `i`.
    /// Returns `true` when the agent died.
    fn step_agent(&mut self, i: usize, scale: f32, events: &mut Vec<WorldEvent>) -> bool {
        let volumetric = self.bounds.depth > 0.0;
        let perception = self.sense(i);
        let max_dist = self.max_sense_distance();
        let (yaw, pitch) = (self.agents.yaw[i], self.agents.pitch[i]);

        let (food_yaw, food_pitch) = perception
            .food
            .map_or((0.0, 0.0), |s| bearing(s.offset, yaw, pitch, volumetric));
        let (pred_yaw, pred_pitch) = perception
            .predator
            .map_or((0.0, 0.0), |s| bearing(s.offset, yaw, pitch, volumetric));

        let cfg = &self.config.agent;
        let inputs = &mut self.input_buffer;
        inputs.clear();
        inputs.push(perception.neighbor_distance / cfg.sensor_range);
        inputs.push(perception.food_distance / max_dist);
        inputs.push(food_yaw);
        if volumetric {
            inputs.push(food_pitch);
        }
        inputs.push(self.agents.energy[i] / cfg.max_energy);
        inputs.push(perception.predator_distance / max_dist);
        inputs.push(pred_yaw);
        if volumetric {
            inputs.push(pred_pitch);
        }

        let offset = i * self.brain.brain_size();
        let outputs = self.brain.compute(
            &self.input_buffer,
            &self.agents.brains,
            offset,
            &mut self.activations,
        );
        let (yaw_force, pitch_force, speed_force) = if volumetric {
            (outputs[0], outputs[1], outputs[2])
        } else {
            (outputs[0], 0.0, outputs[1])
        };

        // Steering and locomotion
        let yaw = wrap_angle(yaw + yaw_force * cfg.turn_rate * scale);
        let pitch = (pitch + pitch_force * cfg.turn_rate * scale)
            .clamp(-cfg.pitch_limit, cfg.pitch_limit);
        let speed = cfg.base_speed + speed_force * cfg.speed_factor;
        let mut velocity = heading_vector(yaw, pitch) * speed;
        if !volumetric {
            velocity.z = 0.0;
        }
        let mut position = self.agents.position[i] + velocity * scale;
        let mut energy = self.agents.energy[i];

        // Feeding
        if let Some(food) = perception.food {
            if food.distance < self.config.food.size + cfg.size {
                energy = (energy + self.config.food.energy).min(cfg.max_energy);
                let spot = self.pattern.sample(
                    &self.bounds,
                    self.config.food.pattern_margin,
                    &mut self.rng,
                );
                self.food.relocate(food.id, spot);
                events.push(WorldEvent::FoodEaten { food: food.id });
            }
        }

        // Reflect at the walls
        reflect(&mut position.x, &mut velocity.x, self.bounds.width);
        reflect(&mut position.y, &mut velocity.y, self.bounds.height);
        reflect(&mut position.z, &mut velocity.z, self.bounds.depth);

        // Metabolism
        energy -= (cfg.base_metabolism + speed_force.abs() * cfg.speed_metabolism) * scale;

        self.agents.yaw[i] = yaw;
        self.agents.pitch[i] = pitch;
        self.agents.velocity[i] = velocity;
        self.agents.position[i] = position;
        self.agents.energy[i] = energy;

        if energy <= 0.0 {
            self.agents.kill(i);
            events.push(WorldEvent::AgentStarved);
            return true;
        }
        false
    }
}

#[inline]
fn reflect(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = -*vel;
    } else if *pos > extent {
        *pos = extent;
        *vel = -*vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_straight_ahead_is_zero() {
        let (y, p) = bearing(Vec3::new(10.0, 0.0, 0.0), 0.0, 0.0, true);
        assert!(y.abs() < 1e-6);
        assert!(p.abs() < 1e-6);
    }

    #[test]
    fn test_bearing_left_and_behind() {
        let (y, _) = bearing(Vec3::new(0.0, 10.0, 0.0), 0.0, 0.0, false);
        assert!((y - 0.5).abs() < 1e-6);
        let (y, _) = bearing(Vec3::new(-10.0, -0.001, 0.0), 0.0, 0.0, false);
        assert!(y < -0.99);
    }

    #[test]
    fn test_bearing_wraps_across_pi() {
        // heading almost -PI, target at +PI - 0.1: relative angle is small
        let (y, _) = bearing(Vec3::new(-1.0, 0.1, 0.0), -PI + 0.05, 0.0, false);
        assert!(y.abs() < 0.1, "{y}");
    }

    #[test]
    fn test_bearing_pitch_up() {
        let (_, p) = bearing(Vec3::new(0.0, 0.0, 5.0), 0.0, 0.0, true);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reflect() {
        let (mut p, mut v) = (-3.0, -2.0);
        reflect(&mut p, &mut v, 10.0);
        assert_eq!((p, v), (0.0, 2.0));
        let (mut p, mut v) = (12.0, 2.0);
        reflect(&mut p, &mut v, 10.0);
        assert_eq!((p, v), (10.0, -2.0));
    }
}
