//! Cross-module ECS integration tests

mod scene_lifecycle;
