//! # Scene
//!
//! A scene owns a set of nodes and an ordered registry of component systems,
//! and drives one tick by invoking each system in registration order.
//!
//! The registry enforces two rules the rest of the crate leans on:
//! - a system type can be registered at most once, and
//! - a component can only be attached through a registered system, so a
//!   failed lookup is a [`SceneError`] rather than a silent `None`.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use thiserror::Error;

use crate::config::SceneConfig;
use crate::ecs::node::{Node, NodeId};
use crate::ecs::system::{ComponentSystem, TypedSystem};
use crate::foundation::collections::{ComponentKey, HandleMap};

/// Errors produced by scene operations
#[derive(Debug, Error)]
pub enum SceneError {
    /// The referenced node does not exist (or was already destroyed)
    #[error("node {0:?} does not exist in this scene")]
    NodeNotFound(NodeId),

    /// A system of this concrete type is already registered
    #[error("system '{0}' is already registered")]
    DuplicateSystem(&'static str),

    /// Components can only be attached through a registered system
    #[error("system '{0}' is not registered; add it before attaching components")]
    SystemNotRegistered(&'static str),

    /// The scene has reached its configured node capacity
    #[error("scene is at its configured node capacity ({max_nodes})")]
    NodeCapacityReached {
        /// The capacity from [`SceneConfig::max_nodes`]
        max_nodes: usize,
    },
}

/// A collection of nodes plus the systems that drive their components
pub struct Scene {
    name: String,
    config: SceneConfig,
    nodes: HandleMap<NodeId, Node>,
    /// Registration order; tick order is exactly this order
    systems: Vec<Box<dyn ComponentSystem>>,
    system_index: HashMap<TypeId, usize>,
    tick_count: u64,
}

impl Scene {
    /// Create a scene with the default configuration
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SceneConfig::default())
    }

    /// Create a scene with a custom configuration
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: SceneConfig) -> Self {
        Self {
            name: name.into(),
            config,
            nodes: HandleMap::with_key(),
            systems: Vec::new(),
            system_index: HashMap::new(),
            tick_count: 0,
        }
    }

    /// Get the scene's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the scene's configuration
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Number of ticks this scene has run
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // --- nodes ---------------------------------------------------------

    /// Create a new node and return its handle
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeCapacityReached`] once the configured
    /// node limit is hit.
    pub fn create_node(&mut self, name: impl Into<String>) -> Result<NodeId, SceneError> {
        if self.nodes.len() >= self.config.max_nodes {
            return Err(SceneError::NodeCapacityReached {
                max_nodes: self.config.max_nodes,
            });
        }
        let id = self.nodes.insert(Node::new(name));
        log::trace!("scene '{}': created node {:?}", self.name, id);
        Ok(id)
    }

    /// Destroy a node, reclaiming every component slot it held
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] if the node was never created or
    /// was already destroyed.
    pub fn destroy_node(&mut self, node: NodeId) -> Result<(), SceneError> {
        let removed = self
            .nodes
            .remove(node)
            .ok_or(SceneError::NodeNotFound(node))?;
        for system in &mut self.systems {
            system.detach(node);
        }
        log::trace!(
            "scene '{}': destroyed node '{}' ({} components reclaimed)",
            self.name,
            removed.name(),
            removed.component_count()
        );
        Ok(())
    }

    /// Look up a node by handle
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    /// Whether the node handle refers to a live node
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Iterate over all live nodes
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Number of live nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // --- systems -------------------------------------------------------

    /// Register a system; tick order follows registration order
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateSystem`] if a system of the same
    /// concrete type is already registered.
    pub fn add_system<S: ComponentSystem>(&mut self, system: S) -> Result<(), SceneError> {
        let type_id = TypeId::of::<S>();
        if self.system_index.contains_key(&type_id) {
            return Err(SceneError::DuplicateSystem(type_name::<S>()));
        }
        log::debug!(
            "scene '{}': registered system '{}' at position {}",
            self.name,
            system.name(),
            self.systems.len()
        );
        self.system_index.insert(type_id, self.systems.len());
        self.systems.push(Box::new(system));
        Ok(())
    }

    /// Look up a registered system by its concrete type
    #[must_use]
    pub fn system<S: ComponentSystem>(&self) -> Option<&S> {
        let index = *self.system_index.get(&TypeId::of::<S>())?;
        self.systems[index].as_any().downcast_ref::<S>()
    }

    /// Look up a registered system by its concrete type, mutably
    pub fn system_mut<S: ComponentSystem>(&mut self) -> Option<&mut S> {
        let index = *self.system_index.get(&TypeId::of::<S>())?;
        self.systems[index].as_any_mut().downcast_mut::<S>()
    }

    /// Number of registered systems
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    // --- components ----------------------------------------------------

    /// Attach a component to a node through system `S`
    ///
    /// The component is constructed by the caller, registered with `S`'s
    /// arena, recorded on the node, and its stable key returned.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NodeNotFound`] for a dead node handle and
    /// [`SceneError::SystemNotRegistered`] if `S` was never added to this
    /// scene.
    pub fn attach<S: TypedSystem>(
        &mut self,
        node: NodeId,
        component: S::Component,
    ) -> Result<ComponentKey, SceneError> {
        if !self.nodes.contains_key(node) {
            return Err(SceneError::NodeNotFound(node));
        }
        let type_id = TypeId::of::<S>();
        let index = *self
            .system_index
            .get(&type_id)
            .ok_or(SceneError::SystemNotRegistered(type_name::<S>()))?;
        let system = self.systems[index]
            .as_any_mut()
            .downcast_mut::<S>()
            .ok_or(SceneError::SystemNotRegistered(type_name::<S>()))?;
        let key = system.store_mut().attach(node, component);
        if let Some(n) = self.nodes.get_mut(node) {
            n.record_component(type_id, key);
        }
        Ok(key)
    }

    /// Detach and return the component system `S` holds for a node
    pub fn detach<S: TypedSystem>(&mut self, node: NodeId) -> Option<S::Component> {
        let type_id = TypeId::of::<S>();
        let index = *self.system_index.get(&type_id)?;
        let system = self.systems[index].as_any_mut().downcast_mut::<S>()?;
        let data = system.store_mut().detach(node)?;
        if let Some(n) = self.nodes.get_mut(node) {
            n.forget_component(type_id);
        }
        Some(data)
    }

    /// Get the component system `S` holds for a node
    #[must_use]
    pub fn component<S: TypedSystem>(&self, node: NodeId) -> Option<&S::Component> {
        self.system::<S>()?.store().get_by_node(node)
    }

    /// Get the component system `S` holds for a node, mutably
    pub fn component_mut<S: TypedSystem>(&mut self, node: NodeId) -> Option<&mut S::Component> {
        self.system_mut::<S>()?.store_mut().get_by_node_mut(node)
    }

    // --- tick ----------------------------------------------------------

    /// Run one tick: update every system, in registration order
    pub fn tick(&mut self, delta_time: f32) {
        for system in &mut self.systems {
            system.update(delta_time);
        }
        self.tick_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::component::{Component, ComponentStore};
    use std::any::Any;

    struct Counter {
        value: u32,
    }
    impl Component for Counter {}

    /// Increments every counter it owns by one per tick
    struct CountSystem {
        store: ComponentStore<Counter>,
        updates_run: u32,
    }

    impl CountSystem {
        fn new() -> Self {
            Self {
                store: ComponentStore::new(),
                updates_run: 0,
            }
        }
    }

    impl ComponentSystem for CountSystem {
        fn name(&self) -> &str {
            "count"
        }

        fn update(&mut self, _delta_time: f32) {
            for (_, counter) in self.store.iter_mut() {
                counter.value += 1;
            }
            self.updates_run += 1;
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

    impl TypedSystem for CountSystem {
        type Component = Counter;

        fn store(&self) -> &ComponentStore<Counter> {
            &self.store
        }

        fn store_mut(&mut self) -> &mut ComponentStore<Counter> {
            &mut self.store
        }
    }

    #[test]
    fn duplicate_system_is_rejected() {
        let mut scene = Scene::new("test");
        scene.add_system(CountSystem::new()).unwrap();
        let err = scene.add_system(CountSystem::new()).unwrap_err();
        assert!(matches!(err, SceneError::DuplicateSystem(_)));
        assert_eq!(scene.system_count(), 1);
    }

    #[test]
    fn attach_requires_registered_system() {
        let mut scene = Scene::new("test");
        let node = scene.create_node("lonely").unwrap();
        let err = scene
            .attach::<CountSystem>(node, Counter { value: 0 })
            .unwrap_err();
        assert!(matches!(err, SceneError::SystemNotRegistered(_)));
    }

    #[test]
    fn attach_requires_live_node() {
        let mut scene = Scene::new("test");
        scene.add_system(CountSystem::new()).unwrap();
        let node = scene.create_node("doomed").unwrap();
        scene.destroy_node(node).unwrap();
        let err = scene
            .attach::<CountSystem>(node, Counter { value: 0 })
            .unwrap_err();
        assert!(matches!(err, SceneError::NodeNotFound(_)));
    }

    #[test]
    fn tick_drives_registered_systems() {
        let mut scene = Scene::new("test");
        scene.add_system(CountSystem::new()).unwrap();
        let node = scene.create_node("counted").unwrap();
        scene.attach::<CountSystem>(node, Counter { value: 0 }).unwrap();

        scene.tick(0.016);
        scene.tick(0.016);
        scene.tick(0.016);

        assert_eq!(scene.tick_count(), 3);
        assert_eq!(scene.component::<CountSystem>(node).map(|c| c.value), Some(3));
    }

    #[test]
    fn destroy_node_reclaims_component_slots() {
        let mut scene = Scene::new("test");
        scene.add_system(CountSystem::new()).unwrap();
        let node = scene.create_node("short-lived").unwrap();
        scene.attach::<CountSystem>(node, Counter { value: 7 }).unwrap();
        assert_eq!(scene.system::<CountSystem>().unwrap().component_count(), 1);

        scene.destroy_node(node).unwrap();
        assert_eq!(scene.system::<CountSystem>().unwrap().component_count(), 0);
        assert!(scene.component::<CountSystem>(node).is_none());
        assert!(!scene.contains_node(node));
    }

    #[test]
    fn node_capacity_is_enforced() {
        let config = SceneConfig { max_nodes: 2 };
        let mut scene = Scene::with_config("tiny", config);
        scene.create_node("a").unwrap();
        scene.create_node("b").unwrap();
        let err = scene.create_node("c").unwrap_err();
        assert!(matches!(err, SceneError::NodeCapacityReached { max_nodes: 2 }));
    }

    #[test]
    fn detach_returns_component_data() {
        let mut scene = Scene::new("test");
        scene.add_system(CountSystem::new()).unwrap();
        let node = scene.create_node("holder").unwrap();
        scene.attach::<CountSystem>(node, Counter { value: 42 }).unwrap();

        let counter = scene.detach::<CountSystem>(node).unwrap();
        assert_eq!(counter.value, 42);
        assert!(scene.component::<CountSystem>(node).is_none());
        // The node itself survives its component
        assert!(scene.contains_node(node));
        assert_eq!(scene.node(node).unwrap().component_count(), 0);
    }
}
