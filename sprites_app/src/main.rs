//! Bouncing-sprites demo application
//!
//! Headless exercise of the engine core: a scene full of nodes with bounce
//! and spin components, driven by the core loop for a fixed number of
//! frames, pulling atlas regions from an explicitly owned sprite sheet.

mod systems;

use node_engine::prelude::*;
use node_engine::assets::sprite_id;
use node_engine::foundation::time::Stopwatch;
use rand::prelude::*;

use systems::{Body, BounceSystem, Spin, SpinSystem};

// Demo tuning
const NODE_COUNT: usize = 64;
const FRAME_CAP: u64 = 600;
const REPORT_EVERY: u64 = 100;

/// Names of the sprites packed into the demo's 4x4 atlas
const SPRITE_NAMES: [&str; 4] = ["player", "enemy", "star", "tile"];

struct BounceApp {
    sheet: SpriteSheet,
    watched: Option<NodeId>,
    runtime: Stopwatch,
}

impl BounceApp {
    fn new() -> Self {
        let mut sheet = SpriteSheet::new();
        // Pack the four demo sprites into the top row of a 4x4 grid
        for (i, name) in SPRITE_NAMES.iter().enumerate() {
            let rect = SpriteRect::new(i as f32 * 0.25, 0.0, 0.25, 0.25);
            sheet.add_sprite(name, rect);
        }
        Self {
            sheet,
            watched: None,
            runtime: Stopwatch::start_new(),
        }
    }
}

impl Application for BounceApp {
    fn initialize(&mut self, core: &mut Core) -> Result<(), AppError> {
        let mut scene = Scene::with_config("bounce", SceneConfig { max_nodes: 256 });
        scene.add_system(BounceSystem::new())?;
        scene.add_system(SpinSystem::new())?;

        let mut rng = rand::thread_rng();
        for i in 0..NODE_COUNT {
            let node = scene.create_node(format!("sprite_{i}"))?;
            let name = SPRITE_NAMES[i % SPRITE_NAMES.len()];
            scene.attach::<BounceSystem>(
                node,
                Body {
                    position: [rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)],
                    velocity: [rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)],
                    sprite: sprite_id(name),
                },
            )?;
            scene.attach::<SpinSystem>(
                node,
                Spin {
                    angle: 0.0,
                    rate: rng.gen_range(-2.0..2.0),
                },
            )?;
            if self.watched.is_none() {
                self.watched = Some(node);
            }
        }

        log::info!(
            "spawned {NODE_COUNT} nodes, atlas holds {} regions",
            self.sheet.len()
        );
        core.push_scene(scene);
        Ok(())
    }

    fn update(&mut self, core: &mut Core, _delta_time: f32) -> Result<(), AppError> {
        let frame = core.timer().frame_count();
        if frame % REPORT_EVERY != 0 {
            return Ok(());
        }

        let Some(scene) = core.active_scene() else {
            return Ok(());
        };
        let Some(node) = self.watched else {
            return Ok(());
        };

        if let Some(body) = scene.component::<BounceSystem>(node) {
            let rect = self.sheet.get(body.sprite);
            log::info!(
                "frame {frame}: '{}' at ({:.2}, {:.2}), atlas region ({}, {}) {}x{}",
                scene.node(node).map_or("?", Node::name),
                body.position[0],
                body.position[1],
                rect.x,
                rect.y,
                rect.w,
                rect.h,
            );
        }
        Ok(())
    }

    fn cleanup(&mut self, core: &mut Core) {
        self.runtime.stop();
        let bounces = core
            .active_scene()
            .and_then(|scene| scene.system::<BounceSystem>())
            .map_or(0, BounceSystem::bounces);
        log::info!(
            "demo finished: {bounces} wall bounces in {:.2}s",
            self.runtime.elapsed_secs()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = CoreConfig {
        app_name: "bounce_demo".to_string(),
        max_frames: FRAME_CAP,
        log_frame_stats: true,
    };
    let mut app = BounceApp::new();
    Core::run(config, &mut app)?;
    Ok(())
}
