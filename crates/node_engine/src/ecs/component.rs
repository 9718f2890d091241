//! Component trait and arena storage
//!
//! Components are plain data bags. They are owned by the arena of the
//! [`ComponentSystem`](crate::ecs::ComponentSystem) that drives them, never
//! by the node they are attached to: nodes hold [`ComponentKey`] handles and
//! a freed slot simply reads back as `None`.

use std::collections::HashMap;

use crate::foundation::collections::{ComponentKey, HandleMap, NodeId};

/// Marker trait for components
///
/// A component is pure data; all per-tick behavior lives in the system that
/// owns its arena.
pub trait Component: 'static + Send + Sync {}

/// One occupied arena slot: the owning node plus the component data
struct Slot<T> {
    node: NodeId,
    data: T,
}

/// Arena of components of a single kind
///
/// Each [`ComponentSystem`](crate::ecs::ComponentSystem) owns exactly one
/// store. A node can hold at most one component per store; attaching a second
/// one replaces the data in place and keeps the existing key valid.
pub struct ComponentStore<T: Component> {
    slots: HandleMap<ComponentKey, Slot<T>>,
    by_node: HashMap<NodeId, ComponentKey>,
}

impl<T: Component> ComponentStore<T> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: HandleMap::with_key(),
            by_node: HashMap::new(),
        }
    }

    /// Attach a component to a node, returning its stable key
    ///
    /// If the node already holds a component in this store, the data is
    /// replaced and the previously issued key remains valid.
    pub fn attach(&mut self, node: NodeId, data: T) -> ComponentKey {
        if let Some(&key) = self.by_node.get(&node) {
            // Slot is guaranteed live while the index entry exists
            if let Some(slot) = self.slots.get_mut(key) {
                slot.data = data;
                return key;
            }
        }
        let key = self.slots.insert(Slot { node, data });
        self.by_node.insert(node, key);
        key
    }

    /// Detach and return the component owned by `node`, freeing its slot
    pub fn detach(&mut self, node: NodeId) -> Option<T> {
        let key = self.by_node.remove(&node)?;
        self.slots.remove(key).map(|slot| slot.data)
    }

    /// Get a component by key
    ///
    /// Returns `None` for stale keys; there is no way to reach freed data.
    #[must_use]
    pub fn get(&self, key: ComponentKey) -> Option<&T> {
        self.slots.get(key).map(|slot| &slot.data)
    }

    /// Get a mutable component by key
    pub fn get_mut(&mut self, key: ComponentKey) -> Option<&mut T> {
        self.slots.get_mut(key).map(|slot| &mut slot.data)
    }

    /// Get the component owned by a node
    #[must_use]
    pub fn get_by_node(&self, node: NodeId) -> Option<&T> {
        self.by_node.get(&node).and_then(|&key| self.get(key))
    }

    /// Get the component owned by a node, mutably
    pub fn get_by_node_mut(&mut self, node: NodeId) -> Option<&mut T> {
        let key = *self.by_node.get(&node)?;
        self.get_mut(key)
    }

    /// Get the key of the component owned by a node
    #[must_use]
    pub fn key_of(&self, node: NodeId) -> Option<ComponentKey> {
        self.by_node.get(&node).copied()
    }

    /// Iterate over all components with their owning node
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.slots.values().map(|slot| (slot.node, &slot.data))
    }

    /// Iterate mutably over all components with their owning node
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut T)> {
        self.slots.values_mut().map(|slot| (slot.node, &mut slot.data))
    }

    /// Number of live components in the arena
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the arena holds no components
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap as NodeMap;

    struct Health(u32);
    impl Component for Health {}

    fn fresh_nodes(n: usize) -> Vec<NodeId> {
        let mut map: NodeMap<NodeId, ()> = NodeMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn attach_then_get_round_trips() {
        let nodes = fresh_nodes(1);
        let mut store = ComponentStore::new();
        let key = store.attach(nodes[0], Health(100));

        assert_eq!(store.get(key).map(|h| h.0), Some(100));
        assert_eq!(store.get_by_node(nodes[0]).map(|h| h.0), Some(100));
        assert_eq!(store.key_of(nodes[0]), Some(key));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reattach_replaces_in_place() {
        let nodes = fresh_nodes(1);
        let mut store = ComponentStore::new();
        let first = store.attach(nodes[0], Health(100));
        let second = store.attach(nodes[0], Health(25));

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(first).map(|h| h.0), Some(25));
    }

    #[test]
    fn stale_key_reads_none_after_detach() {
        let nodes = fresh_nodes(1);
        let mut store = ComponentStore::new();
        let key = store.attach(nodes[0], Health(100));

        let removed = store.detach(nodes[0]);
        assert_eq!(removed.map(|h| h.0), Some(100));
        assert!(store.get(key).is_none());
        assert!(store.get_by_node(nodes[0]).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn iter_visits_every_owner() {
        let nodes = fresh_nodes(3);
        let mut store = ComponentStore::new();
        for (i, &node) in nodes.iter().enumerate() {
            store.attach(node, Health(i as u32));
        }

        let mut seen: Vec<_> = store.iter().map(|(node, h)| (node, h.0)).collect();
        seen.sort_by_key(|&(_, v)| v);
        assert_eq!(seen.len(), 3);
        for (i, &node) in nodes.iter().enumerate() {
            assert_eq!(seen[i], (node, i as u32));
        }
    }
}
