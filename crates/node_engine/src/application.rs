//! Application trait and lifecycle management

use crate::core::{Core, CoreError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game or application on top of the
/// core loop. [`Core::run`](crate::core::Core::run) calls these hooks in
/// order: `initialize` once, `update` every frame, `cleanup` once at
/// shutdown.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the core is constructed. Use this to push scenes,
    /// register systems, and create the initial nodes.
    ///
    /// # Errors
    ///
    /// Returning an error aborts startup before the first frame.
    fn initialize(&mut self, core: &mut Core) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the active scene has ticked.
    ///
    /// # Arguments
    /// * `core` - Mutable reference to the core
    /// * `delta_time` - Time since last frame in seconds
    ///
    /// # Errors
    ///
    /// Returning an error stops the loop and propagates out of
    /// [`Core::run`](crate::core::Core::run).
    fn update(&mut self, core: &mut Core, delta_time: f32) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called when the loop is shutting down. Use this to save state and
    /// release resources.
    fn cleanup(&mut self, core: &mut Core);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Core error propagated to application level
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Scene error propagated to application level
    #[error("Scene error: {0}")]
    Scene(#[from] crate::ecs::SceneError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
