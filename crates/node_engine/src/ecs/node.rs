//! Node implementation
//!
//! A node is an identity inside a scene: it owns no update logic and no
//! component data. It records, per system type, the [`ComponentKey`] of the
//! component that system holds on its behalf, so teardown can reclaim every
//! slot without scanning arenas.

use std::any::TypeId;
use std::collections::HashMap;

use crate::foundation::collections::ComponentKey;

pub use crate::foundation::collections::NodeId;

/// A named identity within a [`Scene`](crate::ecs::Scene)
pub struct Node {
    name: String,
    components: HashMap<TypeId, ComponentKey>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: HashMap::new(),
        }
    }

    /// Get the node's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the component key this node holds for the given system type
    #[must_use]
    pub fn component_key(&self, system: TypeId) -> Option<ComponentKey> {
        self.components.get(&system).copied()
    }

    /// Whether this node holds a component in the given system's arena
    #[must_use]
    pub fn has_component(&self, system: TypeId) -> bool {
        self.components.contains_key(&system)
    }

    /// Number of components attached to this node
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub(crate) fn record_component(&mut self, system: TypeId, key: ComponentKey) {
        self.components.insert(system, key);
    }

    pub(crate) fn forget_component(&mut self, system: TypeId) -> Option<ComponentKey> {
        self.components.remove(&system)
    }
}
