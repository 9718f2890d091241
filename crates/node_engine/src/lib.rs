//! # Node Engine
//!
//! A minimal scene/node/component engine core.
//!
//! ## Features
//!
//! - **Scene Graph**: Scenes own nodes; nodes are plain identities with
//!   component handles
//! - **Component Systems**: Each system owns a homogeneous arena of
//!   components and runs once per tick, in registration order
//! - **Stable Handles**: Components live in slot-map arenas addressed by
//!   generational keys, so a released component can never dangle
//! - **Core Loop**: A single-threaded, synchronous main loop with
//!   application lifecycle hooks
//! - **Sprite Atlas**: An explicitly owned name-to-rectangle lookup table
//!   with a reserved missing-sprite placeholder
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use node_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, core: &mut Core) -> Result<(), AppError> {
//!         let scene = Scene::new("main");
//!         let index = core.push_scene(scene);
//!         core.set_active(index)?;
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _core: &mut Core, _delta_time: f32) -> Result<(), AppError> {
//!         // Per-frame application logic
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _core: &mut Core) {
//!         // Save state, release resources
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CoreConfig::default();
//!     let mut app = MyApp;
//!     Core::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod application;
pub mod assets;
pub mod config;
pub mod ecs;
pub mod foundation;

/// Commonly used types, re-exported for convenience
pub mod prelude {
    pub use crate::application::{AppError, Application};
    pub use crate::assets::{SpriteId, SpriteRect, SpriteSheet};
    pub use crate::config::{Config, ConfigError, CoreConfig, SceneConfig};
    pub use crate::core::{Core, CoreError};
    pub use crate::ecs::{
        Component, ComponentKey, ComponentStore, ComponentSystem, Node, NodeId, Scene,
        SceneError, TypedSystem,
    };
    pub use crate::foundation::time::Timer;
}
