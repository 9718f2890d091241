//! Specialized collection types
//!
//! Components and nodes are stored in slot maps and addressed through
//! generational keys. A key outliving its slot reads back as `None` instead
//! of dangling, which is the whole point of using handles over references.

use slotmap::new_key_type;

pub use slotmap::SlotMap;

new_key_type! {
    /// Stable handle for a node within a scene
    pub struct NodeId;

    /// Stable handle for a component slot within a system's arena
    pub struct ComponentKey;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, V> = SlotMap<K, V>;
