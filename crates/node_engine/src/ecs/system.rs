//! System traits
//!
//! A system owns the arena for one component kind and implements that kind's
//! per-tick behavior. Systems run single-threaded, in the order they were
//! registered with their scene.

use std::any::Any;

use crate::ecs::component::{Component, ComponentStore};
use crate::foundation::collections::NodeId;

/// Object-safe system trait held by the scene's registry
///
/// Implementors typically own a [`ComponentStore`] and delegate
/// [`detach`](ComponentSystem::detach) and
/// [`component_count`](ComponentSystem::component_count) to it.
pub trait ComponentSystem: 'static {
    /// Human-readable system name, used in diagnostics
    fn name(&self) -> &str;

    /// Advance every component owned by this system by one tick
    fn update(&mut self, delta_time: f32);

    /// Release the component held for `node`, if any
    ///
    /// Called by the scene when a node is destroyed so that no arena slot
    /// outlives its owner.
    fn detach(&mut self, node: NodeId);

    /// Number of live components in this system's arena
    fn component_count(&self) -> usize;

    /// Upcast for typed lookup through the scene registry
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed lookup through the scene registry
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Typed view of a system, exposing its concrete component arena
///
/// This is the seam the scene uses to implement `attach`/`component` without
/// knowing component types: the system type parameter picks both the arena
/// and the component kind at compile time.
pub trait TypedSystem: ComponentSystem + Sized {
    /// The component kind this system owns
    type Component: Component;

    /// Borrow the system's arena
    fn store(&self) -> &ComponentStore<Self::Component>;

    /// Mutably borrow the system's arena
    fn store_mut(&mut self) -> &mut ComponentStore<Self::Component>;
}
