//! Entity-Component-System implementation
//!
//! Components are plain data owned by per-system arenas; nodes are scene
//! identities holding stable handles; scenes drive systems in registration
//! order.

pub mod component;
pub mod node;
pub mod scene;
pub mod system;

pub use component::{Component, ComponentStore};
pub use node::{Node, NodeId};
pub use scene::{Scene, SceneError};
pub use system::{ComponentSystem, TypedSystem};

pub use crate::foundation::collections::ComponentKey;

#[cfg(test)]
mod tests;
