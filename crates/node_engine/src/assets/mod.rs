//! Asset lookup tables
//!
//! Deliberately narrow: the only asset surface the engine core carries is
//! the sprite atlas table. Anything heavier (loading pipelines, caches)
//! lives in collaborators built on top of the component/query interface.

pub mod sprite_sheet;

pub use sprite_sheet::{sprite_id, SpriteId, SpriteRect, SpriteSheet};
