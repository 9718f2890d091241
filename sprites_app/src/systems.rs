//! Component systems for the bounce demo

use std::any::Any;

use node_engine::assets::SpriteId;
use node_engine::ecs::{Component, ComponentStore, ComponentSystem, NodeId, TypedSystem};

/// A sprite bouncing around the unit square
pub struct Body {
    /// Position in [0, 1]²
    pub position: [f32; 2],
    /// Velocity in units per second
    pub velocity: [f32; 2],
    /// Which atlas region this body is drawn with
    pub sprite: SpriteId,
}
impl Component for Body {}

/// Integrates bodies and reflects them off the unit-square walls
pub struct BounceSystem {
    store: ComponentStore<Body>,
    bounces: u64,
}

impl BounceSystem {
    pub fn new() -> Self {
        Self {
            store: ComponentStore::new(),
            bounces: 0,
        }
    }

    /// Total wall bounces since creation
    pub fn bounces(&self) -> u64 {
        self.bounces
    }
}

impl ComponentSystem for BounceSystem {
    fn name(&self) -> &str {
        "bounce"
    }

    fn update(&mut self, delta_time: f32) {
        for (_, body) in self.store.iter_mut() {
            for axis in 0..2 {
                body.position[axis] += body.velocity[axis] * delta_time;
                if !(0.0..=1.0).contains(&body.position[axis]) {
                    body.position[axis] = body.position[axis].clamp(0.0, 1.0);
                    body.velocity[axis] = -body.velocity[axis];
                    self.bounces += 1;
                }
            }
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

impl TypedSystem for BounceSystem {
    type Component = Body;

    fn store(&self) -> &ComponentStore<Body> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ComponentStore<Body> {
        &mut self.store
    }
}

/// Rotation state for a spinning sprite
pub struct Spin {
    /// Current angle in radians
    pub angle: f32,
    /// Angular velocity in radians per second
    pub rate: f32,
}
impl Component for Spin {}

/// Advances every spin angle, wrapping at a full turn
pub struct SpinSystem {
    store: ComponentStore<Spin>,
}

impl SpinSystem {
    pub fn new() -> Self {
        Self {
            store: ComponentStore::new(),
        }
    }
}

impl ComponentSystem for SpinSystem {
    fn name(&self) -> &str {
        "spin"
    }

    fn update(&mut self, delta_time: f32) {
        for (_, spin) in self.store.iter_mut() {
            spin.angle = (spin.angle + spin.rate * delta_time) % std::f32::consts::TAU;
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

impl TypedSystem for SpinSystem {
    type Component = Spin;

    fn store(&self) -> &ComponentStore<Spin> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ComponentStore<Spin> {
        &mut self.store
    }
}
