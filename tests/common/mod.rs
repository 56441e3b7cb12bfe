use neuroswarm_lib::{AppConfig, Vec3, World};
use neuroswarm_core::config::StepMode;
use neuroswarm_data::PredatorStore;

/// Seeded, empty world factory for scenario tests.
///
/// Defaults: a 1000-unit cube, capacity 16, no agents, food or predators,
/// fixed time stepping, and timers and the extinction guard pushed out of
/// reach so nothing happens unless a test asks for it.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<AgentBuilder>,
    food: Vec<Vec3>,
    predators: Vec<Vec3>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(42);
        config.world.width = 1000.0;
        config.world.height = 1000.0;
        config.world.depth = 1000.0;
        config.world.agent_capacity = 16;
        config.world.initial_population = 0;
        config.food.initial_count = 0;
        config.food.max_count = 64;
        config.food.pattern_interval = 1.0e9;
        config.predator.ratio = usize::MAX;
        config.evolution.epoch_length = 1.0e9;
        config.evolution.min_population = 0;
        config.physics.step_mode = StepMode::Fixed;
        Self {
            config,
            agents: Vec::new(),
            food: Vec::new(),
            predators: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.world.agent_capacity = capacity;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: AgentBuilder) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_food(mut self, x: f32, y: f32, z: f32) -> Self {
        self.food.push(Vec3::new(x, y, z));
        self
    }

    pub fn with_predator(mut self, x: f32, y: f32, z: f32) -> Self {
        self.predators.push(Vec3::new(x, y, z));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");

        for p in self.food {
            world
                .spawn_food_cluster(p, 1, 0.0)
                .expect("Failed to place food in test builder");
        }
        if !self.predators.is_empty() {
            world.predators = PredatorStore::new(self.predators);
        }
        for agent in self.agents {
            let id = world
                .spawn_agent(agent.position)
                .expect("Test builder exceeded agent capacity");
            world.agents.energy[id] = agent.energy;
            if let Some(yaw) = agent.yaw {
                world.agents.yaw[id] = yaw;
            }
            if agent.zero_brain {
                world.agents.brain_mut(id).fill(0.0);
            }
        }
        world.rebuild_spatial_hashes();
        world
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    position: Vec3,
    energy: f32,
    yaw: Option<f32>,
    zero_brain: bool,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(500.0, 500.0, 500.0),
            energy: 100.0,
            yaw: None,
            zero_brain: false,
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn energy(mut self, amount: f32) -> Self {
        self.energy = amount;
        self
    }

    pub fn yaw(mut self, yaw: f32) -> Self {
        self.yaw = Some(yaw);
        self
    }

    /// All-zero weights: no steering, base speed, minimum metabolism.
    pub fn zero_brain(mut self) -> Self {
        self.zero_brain = true;
        self
    }
}
