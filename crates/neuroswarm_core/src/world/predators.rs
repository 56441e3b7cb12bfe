use super::{World, WorldEvent};

impl World {
    /// Moves every predator one step toward its nearest living agent and
    /// captures that agent when it ends the step within reach.
    ///
    /// Captures take effect immediately, so later predators scan the
    /// already-reduced population.
    pub(super) fn update_predators(&mut self, scale: f32, events: &mut Vec<WorldEvent>) {
        let speed = self.config.predator.speed * scale;
        let reach = self.config.predator.size + self.config.agent.size / 2.0;

        for p in 0..self.predators.len() {
            let Some(target) = self.nearest_agent_to_predator(p) else {
                continue;
            };

            let offset = self.agents.position[target] - self.predators.position[p];
            if let Some(dir) = offset.normalized() {
                self.predators.position[p] += dir * speed;
            }

            let dist = (self.agents.position[target] - self.predators.position[p]).length();
            if dist < reach {
                self.agents.kill(target);
                events.push(WorldEvent::AgentCaptured { predator: p });
            }
        }
    }

    /// Brute-force nearest living agent. Ties keep the earliest index.
    fn nearest_agent_to_predator(&self, p: usize) -> Option<usize> {
        let origin = self.predators.position[p];
        let mut best: Option<(usize, f32)> = None;
        for (a, pos) in self.agents.position[..self.agents.count].iter().enumerate() {
            let d = origin.distance_squared(*pos);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((a, d));
            }
        }
        best.map(|(a, _)| a)
    }
}
