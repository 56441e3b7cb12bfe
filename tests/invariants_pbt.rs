mod common;

use common::{AgentBuilder, WorldBuilder};
use neuroswarm_core::config::StepMode;
use neuroswarm_lib::Dimensionality;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_population_and_energy_stay_in_range(
        seed in any::<u64>(),
        population in 0usize..=24,
        food in 0usize..=40,
        ticks in 1usize..60,
        planar in any::<bool>(),
    ) {
        let mut world = WorldBuilder::new()
            .with_seed(seed)
            .with_capacity(24)
            .with_config(|c| {
                c.world.initial_population = population;
                c.food.initial_count = food;
                c.predator.ratio = 12;
                c.evolution.epoch_length = 0.5;
                c.evolution.min_population = 4;
                c.food.pattern_interval = 0.3;
                c.physics.step_mode = StepMode::Scaled;
                if planar {
                    c.world.dimensionality = Dimensionality::Planar;
                }
            })
            .build();

        for _ in 0..ticks {
            world.tick(1.0 / 30.0);
            let n = world.population();
            prop_assert!(n <= world.capacity());
            for i in 0..n {
                let e = world.agents.energy[i];
                prop_assert!(e > 0.0 && e <= 100.0, "energy {} out of range", e);
                prop_assert!(world.bounds.contains(world.agents.position[i]));
                if planar {
                    prop_assert_eq!(world.agents.position[i].z, 0.0);
                }
            }
            prop_assert!(world.food.count <= world.food.capacity);
            prop_assert!(world.food.live().iter().all(|p| world.bounds.contains(*p)));
        }
    }

    #[test]
    fn test_evolution_always_fills_capacity(
        seed in any::<u64>(),
        energies in prop::collection::vec(0.1f32..100.0, 0..12),
    ) {
        let mut builder = WorldBuilder::new().with_seed(seed).with_capacity(12);
        for e in &energies {
            builder = builder.with_agent(AgentBuilder::new().energy(*e));
        }
        let mut world = builder.build();

        world.evolve();
        prop_assert_eq!(world.population(), 12);
        let limit = world.config.evolution.weight_limit.max(world.config.brain.init_range);
        prop_assert!(world.agents.brains.iter().all(|w| w.abs() <= limit));
    }

    #[test]
    fn test_any_dt_is_accepted(dt in prop::num::f32::ANY) {
        let mut world = WorldBuilder::new()
            .with_config(|c| c.physics.step_mode = StepMode::Scaled)
            .with_agent(AgentBuilder::new())
            .build();
        world.tick(dt);
        prop_assert!(world.pattern_timer.is_finite());
        prop_assert!(world.bounds.contains(world.agents.position[0]));
    }
}
