//! Core loop implementation
//!
//! [`Core`] owns the ordered sequence of scenes and the top-level loop
//! lifecycle: created at process start, ticked once per frame, destroyed at
//! shutdown. Exactly one scene is active at a time; ticking with no active
//! scene is an error rather than a silent no-op.

use thiserror::Error;

use crate::application::Application;
use crate::config::CoreConfig;
use crate::ecs::Scene;
use crate::foundation::time::Timer;

/// Errors produced by the core loop
#[derive(Debug, Error)]
pub enum CoreError {
    /// `tick` was called before any scene was activated
    #[error("no active scene; push a scene and call set_active first")]
    NoActiveScene,

    /// `set_active` was given an index outside the scene sequence
    #[error("scene index {index} out of range ({count} scenes)")]
    SceneIndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of scenes currently owned by the core
        count: usize,
    },

    /// An application hook failed
    #[error("application error: {0}")]
    Application(String),
}

/// Owner of the scene sequence and the main loop
///
/// Single-threaded and synchronous: one `tick` advances the frame timer and
/// runs every system of the active scene, in registration order.
pub struct Core {
    scenes: Vec<Scene>,
    active: Option<usize>,
    timer: Timer,
    config: CoreConfig,
    running: bool,
}

impl Core {
    /// Create a new core with the given configuration
    #[must_use]
    pub fn new(config: CoreConfig) -> Self {
        log::info!("{}: core created", config.app_name);
        Self {
            scenes: Vec::new(),
            active: None,
            timer: Timer::new(),
            config,
            running: true,
        }
    }

    /// Get the core configuration
    #[must_use]
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Get the frame timer
    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    // --- scenes --------------------------------------------------------

    /// Append a scene to the sequence, returning its index
    ///
    /// The first scene pushed becomes active automatically.
    pub fn push_scene(&mut self, scene: Scene) -> usize {
        log::debug!(
            "{}: pushed scene '{}' at index {}",
            self.config.app_name,
            scene.name(),
            self.scenes.len()
        );
        self.scenes.push(scene);
        let index = self.scenes.len() - 1;
        if self.active.is_none() {
            self.active = Some(index);
        }
        index
    }

    /// Make the scene at `index` the active one
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SceneIndexOutOfRange`] for an invalid index.
    pub fn set_active(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.scenes.len() {
            return Err(CoreError::SceneIndexOutOfRange {
                index,
                count: self.scenes.len(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    /// Get the active scene, if any
    #[must_use]
    pub fn active_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.active?)
    }

    /// Get the active scene mutably, if any
    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        self.scenes.get_mut(self.active?)
    }

    /// Get a scene by index
    #[must_use]
    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Number of scenes owned by the core
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    // --- loop ----------------------------------------------------------

    /// Advance the timer and tick the active scene once
    ///
    /// Returns the frame's delta time in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoActiveScene`] if no scene is active.
    pub fn tick(&mut self) -> Result<f32, CoreError> {
        let index = self.active.ok_or(CoreError::NoActiveScene)?;
        let delta_time = self.timer.tick();
        // `active` is only ever set through bounds-checked paths
        if let Some(scene) = self.scenes.get_mut(index) {
            scene.tick(delta_time);
        }
        Ok(delta_time)
    }

    /// Request the main loop to stop after the current frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the loop is still running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the main loop with the given application
    ///
    /// Ticks until the application calls [`Core::stop`], an update hook
    /// fails, or the configured frame cap is reached.
    ///
    /// # Errors
    ///
    /// Propagates initialization and update failures as
    /// [`CoreError::Application`]; `cleanup` still runs on update failure.
    pub fn run<T: Application>(config: CoreConfig, app: &mut T) -> Result<(), CoreError> {
        let max_frames = config.max_frames;
        let log_frame_stats = config.log_frame_stats;
        let mut core = Self::new(config);

        app.initialize(&mut core)
            .map_err(|e| CoreError::Application(format!("initialize: {e}")))?;

        log::info!("{}: starting main loop", core.config.app_name);

        // Keep initialization time out of the first frame's delta
        core.timer.rearm();

        let mut result = Ok(());
        while core.running {
            let delta_time = match core.tick() {
                Ok(dt) => dt,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            };

            if let Err(e) = app.update(&mut core, delta_time) {
                result = Err(CoreError::Application(format!("update: {e}")));
                break;
            }

            if max_frames > 0 && core.timer.frame_count() >= max_frames {
                core.running = false;
            }
        }

        app.cleanup(&mut core);

        if log_frame_stats {
            log::info!(
                "{}: shutdown after {} frames, {:.1} fps average",
                core.config.app_name,
                core.timer.frame_count(),
                core.timer.average_fps()
            );
        } else {
            log::info!("{}: shutdown complete", core.config.app_name);
        }

        result
    }
}
