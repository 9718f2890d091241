//! Integration tests for full scene lifecycle
//!
//! Exercises the registry, arenas, and tick loop together with two systems
//! driving independent component kinds on shared nodes.

use std::any::Any;

use approx::assert_relative_eq;

use crate::ecs::{Component, ComponentStore, ComponentSystem, NodeId, Scene, TypedSystem};

/// 2D position integrated from a fixed velocity
struct Body {
    position: [f32; 2],
    velocity: [f32; 2],
}
impl Component for Body {}

struct MovementSystem {
    store: ComponentStore<Body>,
}

impl MovementSystem {
    fn new() -> Self {
        Self {
            store: ComponentStore::new(),
        }
    }
}

impl ComponentSystem for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn update(&mut self, delta_time: f32) {
        for (_, body) in self.store.iter_mut() {
            body.position[0] += body.velocity[0] * delta_time;
            body.position[1] += body.velocity[1] * delta_time;
        }
    }

    fn detach(&mut self, node: NodeId) {
        self.store.detach(node);
    }

    fn component_count(&self) -> usize {
        self.store.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl TypedSystem for MovementSystem {
    type Component = Body;

    fn store(&self) -> &ComponentStore<Body> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ComponentStore<Body> {
        &mut self.store
    }
}

/// Records the order in which systems ran within a tick
struct Tracer {
    label: u8,
}
impl Component for Tracer {}

/// Appends its label to a shared-per-system trace on every update
struct TraceSystem<const LABEL: u8> {
    store: ComponentStore<Tracer>,
    trace: Vec<u8>,
}

impl<const LABEL: u8> TraceSystem<LABEL> {
    fn new() -> Self {
        Self {
            store: ComponentStore::new(),
            trace: Vec::new(),
        }
    }
}

impl<const LABEL: u8> ComponentSystem for TraceSystem<LABEL> {
    fn name(&self) -> &str {
        "trace"
    }

    fn update(&mut self, _delta_time: f32) {
        self.trace.push(LABEL);
    }

    fn detach(&mut self, node: NodeId) {
        self.store.detach(node);
    }

    fn component_count(&self) -> usize {
        self.store.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<const LABEL: u8> TypedSystem for TraceSystem<LABEL> {
    type Component = Tracer;

    fn store(&self) -> &ComponentStore<Tracer> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ComponentStore<Tracer> {
        &mut self.store
    }
}

#[test]
fn movement_integrates_over_ticks() {
    let mut scene = Scene::new("integration");
    scene.add_system(MovementSystem::new()).unwrap();

    let node = scene.create_node("mover").unwrap();
    scene
        .attach::<MovementSystem>(
            node,
            Body {
                position: [0.0, 1.0],
                velocity: [2.0, -0.5],
            },
        )
        .unwrap();

    // 10 ticks at a fixed 0.1s step = 1 second of simulation
    for _ in 0..10 {
        scene.tick(0.1);
    }

    let body = scene.component::<MovementSystem>(node).unwrap();
    assert_relative_eq!(body.position[0], 2.0, epsilon = 1e-5);
    assert_relative_eq!(body.position[1], 0.5, epsilon = 1e-5);
}

#[test]
fn tick_order_follows_registration_order() {
    let mut scene = Scene::new("ordered");
    scene.add_system(TraceSystem::<0>::new()).unwrap();
    scene.add_system(TraceSystem::<1>::new()).unwrap();
    scene.add_system(MovementSystem::new()).unwrap();

    scene.tick(0.016);
    scene.tick(0.016);

    // Each trace system ran once per tick; distinct const parameters are
    // distinct concrete types, so both registrations are legal.
    assert_eq!(scene.system::<TraceSystem<0>>().unwrap().trace, vec![0, 0]);
    assert_eq!(scene.system::<TraceSystem<1>>().unwrap().trace, vec![1, 1]);
}

#[test]
fn one_node_can_hold_components_in_many_systems() {
    let mut scene = Scene::new("multi");
    scene.add_system(MovementSystem::new()).unwrap();
    scene.add_system(TraceSystem::<9>::new()).unwrap();

    let node = scene.create_node("hybrid").unwrap();
    scene
        .attach::<MovementSystem>(
            node,
            Body {
                position: [0.0, 0.0],
                velocity: [1.0, 1.0],
            },
        )
        .unwrap();
    scene
        .attach::<TraceSystem<9>>(node, Tracer { label: 9 })
        .unwrap();

    assert_eq!(scene.node(node).unwrap().component_count(), 2);
    assert_eq!(
        scene.component::<TraceSystem<9>>(node).map(|t| t.label),
        Some(9)
    );

    scene.destroy_node(node).unwrap();
    assert_eq!(scene.system::<MovementSystem>().unwrap().component_count(), 0);
    assert_eq!(scene.system::<TraceSystem<9>>().unwrap().component_count(), 0);
}

#[test]
fn stale_node_handles_stay_dead_after_reuse() {
    let mut scene = Scene::new("reuse");
    scene.add_system(MovementSystem::new()).unwrap();

    let first = scene.create_node("first").unwrap();
    scene.destroy_node(first).unwrap();

    // A new node may reuse the slot, but the old generational handle must
    // not resolve to it.
    let second = scene.create_node("second").unwrap();
    assert_ne!(first, second);
    assert!(!scene.contains_node(first));
    assert!(scene.contains_node(second));
    assert!(scene.component::<MovementSystem>(first).is_none());
}
