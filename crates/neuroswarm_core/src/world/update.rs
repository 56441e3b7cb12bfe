use super::{World, WorldEvent};

impl World {
    /// Advances the simulation by one tick of `dt` seconds.
    ///
    /// Order within a tick:
    /// 1. pattern timer (may relocate all food)
    /// 2. epoch timer / extinction guard (may run selection)
    /// 3. rebuild agent and food spatial hashes
    /// 4. predators hunt
    /// 5. agents sense, decide, move, feed and metabolize
    ///
    /// `dt` is capped at `physics.max_dt`; negative or non-finite values are
    /// treated as zero.
    pub fn tick(&mut self, dt: f32) -> Vec<WorldEvent> {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.physics.max_dt)
        } else {
            0.0
        };
        let scale = self.config.physics.step_scale(dt);
        let mut events = Vec::new();
        self.tick += 1;

        self.pattern_timer += dt;
        if self.pattern_timer > self.config.food.pattern_interval {
            self.pattern_timer = 0.0;
            self.switch_pattern();
            events.push(WorldEvent::PatternSwitched {
                pattern: self.pattern,
            });
        }

        self.epoch_timer += dt;
        if self.epoch_timer > self.config.evolution.epoch_length
            || self.agents.count < self.config.evolution.min_population
        {
            events.push(self.evolve());
            self.epoch_timer = 0.0;
        }

        self.rebuild_spatial_hashes();
        self.update_predators(scale, &mut events);
        self.update_agents(scale, &mut events);

        let (mut captures, mut starvations) = (0usize, 0usize);
        for event in &events {
            match event {
                WorldEvent::AgentCaptured { .. } => captures += 1,
                WorldEvent::AgentStarved => starvations += 1,
                _ => {}
            }
        }
        if captures + starvations > 0 {
            tracing::debug!(
                tick = self.tick,
                captures,
                starvations,
                agents = self.agents.count,
                "Agents died"
            );
        }
        events
    }

    /// Moves to the next food pattern and relocates every food item under it.
    pub fn switch_pattern(&mut self) {
        self.pattern = self.pattern.next();
        let margin = self.config.food.pattern_margin;
        for id in 0..self.food.count {
            let p = self.pattern.sample(&self.bounds, margin, &mut self.rng);
            self.food.relocate(id, p);
        }
        tracing::info!(pattern = self.pattern.name(), food = self.food.count, "Food pattern switched");
    }

    /// Rebuilds both grids from current positions. [`World::tick`] does this
    /// at the start of every tick; call it before [`World::sense`] when
    /// positions were changed from outside.
    pub fn rebuild_spatial_hashes(&mut self) {
        self.spatial_hash.clear();
        for (i, p) in self.agents.position[..self.agents.count].iter().enumerate() {
            self.spatial_hash.insert(i, p.x, p.y);
        }

        self.food_hash.clear();
        for (i, p) in self.food.live().iter().enumerate() {
            self.food_hash.insert(i, p.x, p.y);
        }
    }
}
