mod common;

use common::{AgentBuilder, WorldBuilder};
use neuroswarm_lib::{Dimensionality, SimError, Vec3};

fn planar() -> WorldBuilder {
    WorldBuilder::new().with_config(|c| c.world.dimensionality = Dimensionality::Planar)
}

#[test]
fn test_planar_world_stays_flat() {
    let mut world = planar()
        .with_capacity(12)
        .with_config(|c| {
            c.world.initial_population = 12;
            c.food.initial_count = 20;
            c.food.pattern_interval = 0.2;
        })
        .build();

    assert_eq!(world.bounds.depth, 0.0);
    for _ in 0..30 {
        world.tick(0.05);
    }
    let n = world.population();
    assert!(world.agents.position[..n].iter().all(|p| p.z == 0.0));
    assert!(world.agents.velocity[..n].iter().all(|v| v.z == 0.0));
    assert!(world.agents.pitch[..n].iter().all(|&p| p == 0.0));
    assert!(world.food.live().iter().all(|p| p.z == 0.0));
}

#[test]
fn test_planar_resize_ignores_depth() {
    let mut world = planar().with_agent(AgentBuilder::new()).build();
    world.resize(300.0, 200.0, 999.0).unwrap();
    assert_eq!(world.bounds.depth, 0.0);
    assert_eq!(world.agents.position[0], Vec3::new(300.0, 200.0, 0.0));
}

#[test]
fn test_volumetric_resize_requires_depth() {
    let mut world = WorldBuilder::new().build();
    assert_eq!(
        world.resize(300.0, 200.0, 0.0),
        Err(SimError::InvalidBounds {
            width: 300.0,
            height: 200.0,
            depth: 0.0
        })
    );
}

#[test]
fn test_sensing_after_resize_uses_new_grid() {
    let mut world = WorldBuilder::new()
        .with_agent(AgentBuilder::new().at(900.0, 900.0, 100.0))
        .with_agent(AgentBuilder::new().at(100.0, 100.0, 100.0))
        .build();

    world.resize(120.0, 120.0, 200.0).unwrap();
    // both agents are now clamped near the same corner
    let d = world.sense(0).neighbor_distance;
    assert!(d < world.config.agent.sensor_range, "{d}");
}

#[test]
fn test_food_cluster_lands_near_center() {
    let mut world = WorldBuilder::new().build();
    let center = Vec3::new(250.0, 250.0, 250.0);
    assert_eq!(world.spawn_food_cluster(center, 12, 30.0), Ok(12));
    assert!(world
        .food
        .live()
        .iter()
        .all(|p| (*p - center).length() <= 30.0 + 1e-3));
}

#[test]
fn test_spawn_past_capacity_is_noop() {
    let mut world = WorldBuilder::new().with_capacity(2).build();
    assert!(world.spawn_agent(Vec3::ZERO).is_some());
    assert!(world.spawn_agent(Vec3::ZERO).is_some());
    assert!(world.spawn_agent(Vec3::ZERO).is_none());
    assert_eq!(world.population(), 2);
}

#[test]
fn test_kill_agent_swaps_last_into_slot() {
    let mut world = WorldBuilder::new()
        .with_agent(AgentBuilder::new().at(10.0, 10.0, 10.0))
        .with_agent(AgentBuilder::new().at(20.0, 20.0, 20.0))
        .with_agent(AgentBuilder::new().at(30.0, 30.0, 30.0))
        .build();
    let last_brain = world.agents.brain(2).to_vec();

    world.kill_agent(0).unwrap();
    assert_eq!(world.population(), 2);
    assert_eq!(world.agents.position[0], Vec3::new(30.0, 30.0, 30.0));
    assert_eq!(world.agents.brain(0), last_brain.as_slice());
    assert!(world.kill_agent(2).is_err());
}

#[test]
fn test_new_world_opens_on_star_pattern() {
    let mut world = WorldBuilder::new()
        .with_config(|c| c.food.initial_count = 5)
        .build();
    assert_eq!(world.pattern, neuroswarm_core::FoodPattern::Star);

    world.switch_pattern();
    assert_eq!(world.pattern, neuroswarm_core::FoodPattern::Ring);
}
