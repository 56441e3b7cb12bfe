use super::{World, WorldEvent, ELITE_COLOR};
use rand::Rng;

impl World {
    /// Elitist selection.
    ///
    /// The living population is ranked by energy (highest first, ties keep
    /// index order) and the top half survives. Every slot up to capacity is
    /// refilled with a fresh random body carrying the brain of survivor
    /// `slot % survivors`. The first `survivors` slots are unmutated elites;
    /// the rest are mutated clones with a jittered color.
    ///
    /// With fewer than two living agents the population is replaced with
    /// fresh random agents instead.
    pub fn evolve(&mut self) -> WorldEvent {
        let living = self.agents.count;
        let mut ranking: Vec<usize> = (0..living).collect();
        let energy = &self.agents.energy;
        ranking.sort_by(|&a, &b| energy[b].total_cmp(&energy[a]));

        let survivors = living / 2;
        let capacity = self.agents.capacity;

        if survivors == 0 {
            self.agents.clear();
            for _ in 0..capacity {
                self.spawn_random_agent();
            }
            tracing::info!(living, respawned = self.agents.count, "Extinction, population respawned");
            return WorldEvent::Extinction;
        }

        let best_energy = self.agents.energy[ranking[0]];
        let brain_size = self.brain.brain_size();
        let mut parent_brains = Vec::with_capacity(survivors * brain_size);
        let mut parent_generations = Vec::with_capacity(survivors);
        for &idx in &ranking[..survivors] {
            parent_brains.extend_from_slice(self.agents.brain(idx));
            parent_generations.push(self.agents.generation[idx]);
        }

        self.agents.clear();
        let rate = self.config.evolution.mutation_rate;
        let jitter = self.config.evolution.color_jitter;
        let mut generation = 0;

        for slot in 0..capacity {
            let Some(id) = self.spawn_random_agent() else {
                break;
            };
            let parent = slot % survivors;
            self.agents
                .brain_mut(id)
                .copy_from_slice(&parent_brains[parent * brain_size..(parent + 1) * brain_size]);

            if slot < survivors {
                self.agents.color[id] = ELITE_COLOR;
            } else {
                self.brain
                    .mutate(&mut self.agents.brains, id * brain_size, rate, &mut self.rng);
                let color = &mut self.agents.color[id];
                for c in color.iter_mut().take(2) {
                    *c = (*c + self.rng.gen_range(-jitter..=jitter)).clamp(0.0, 255.0);
                }
            }

            let g = parent_generations[parent] + 1;
            self.agents.generation[id] = g;
            generation = generation.max(g);
        }

        tracing::info!(
            survivors,
            best_energy,
            generation,
            population = self.agents.count,
            "Population evolved"
        );
        WorldEvent::Evolved {
            survivors,
            best_energy,
            generation,
        }
    }
}
