//! Sprite atlas lookup table
//!
//! Maps sprite names (via a deterministic hash) or raw integer ids to
//! rectangle regions inside an atlas image. The table is an explicitly
//! constructed, explicitly owned value: whoever renders sprites owns a
//! sheet, and its lifetime is tied to that owner's scope. There is no
//! process-wide table.
//!
//! Id `0` is reserved for the missing-sprite placeholder covering the unit
//! rectangle; lookups for unknown ids fall back to it instead of faulting.
//!
//! Collision hazard: two distinct names hashing to the same id overwrite
//! each other's entry. This is a documented property of the hashed keyspace,
//! kept as-is; the overwrite is logged but not prevented.

use std::collections::HashMap;

/// Identifier for a sprite region, derived from the sprite's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(u32);

impl SpriteId {
    /// The reserved id of the missing-sprite placeholder
    pub const MISSING: Self = Self(0);

    /// Wrap a raw integer id, for callers that stored ids externally
    #[must_use]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw integer id
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Axis-aligned rectangle region within an atlas, in atlas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl SpriteRect {
    /// The unit rectangle, used for the missing-sprite placeholder
    pub const UNIT: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
    };

    /// Create a rectangle from its left/top corner and extent
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Compute the id a sprite name maps to
///
/// FNV-1a over the name's bytes; deterministic and pure, so repeated calls
/// with the same name always produce the same id. A name hashing to exactly
/// `0` is remapped to `1` so the reserved placeholder entry can never be
/// clobbered.
#[must_use]
pub fn sprite_id(name: &str) -> SpriteId {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    let mut hash = FNV_OFFSET;
    for byte in name.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    SpriteId(if hash == 0 { 1 } else { hash })
}

/// Name-to-rectangle sprite atlas table
///
/// ```
/// use node_engine::assets::{sprite_sheet, SpriteRect, SpriteSheet};
///
/// let mut sheet = SpriteSheet::new();
/// let id = sheet.add_sprite("player", SpriteRect::new(0.0, 0.0, 0.25, 0.25));
/// assert_eq!(sheet.get(id), sheet.get_by_name("player"));
/// assert_eq!(id, sprite_sheet::sprite_id("player"));
/// ```
pub struct SpriteSheet {
    regions: HashMap<SpriteId, SpriteRect>,
    /// Registered name per id, kept to diagnose hash collisions
    names: HashMap<SpriteId, String>,
    missing: SpriteRect,
}

impl SpriteSheet {
    /// Create a sheet containing only the reserved placeholder entry
    #[must_use]
    pub fn new() -> Self {
        let mut regions = HashMap::new();
        regions.insert(SpriteId::MISSING, SpriteRect::UNIT);
        Self {
            regions,
            names: HashMap::new(),
            missing: SpriteRect::UNIT,
        }
    }

    /// Register a sprite region under a name, returning its id
    ///
    /// Re-registering the same name replaces its region and returns the same
    /// id. A distinct name hashing to an occupied id overwrites that entry;
    /// the collision is logged and the overwrite stands.
    pub fn add_sprite(&mut self, name: &str, rect: SpriteRect) -> SpriteId {
        let id = sprite_id(name);
        if let Some(previous) = self.names.get(&id) {
            if previous != name {
                log::warn!(
                    "sprite id collision: '{name}' overwrites '{previous}' (id {})",
                    id.raw()
                );
            }
        }
        self.names.insert(id, name.to_string());
        self.regions.insert(id, rect);
        id
    }

    /// Look up a sprite region by id
    ///
    /// Unknown ids resolve to the missing-sprite placeholder.
    #[must_use]
    pub fn get(&self, id: SpriteId) -> &SpriteRect {
        if let Some(rect) = self.regions.get(&id) {
            rect
        } else {
            log::warn!("unknown sprite id {}, using placeholder", id.raw());
            &self.missing
        }
    }

    /// Look up a sprite region by name
    ///
    /// Equivalent to `get(sprite_id(name))` for every name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> &SpriteRect {
        self.get(sprite_id(name))
    }

    /// Whether an entry is registered under this id
    #[must_use]
    pub fn contains(&self, id: SpriteId) -> bool {
        self.regions.contains_key(&id)
    }

    /// Number of entries, including the reserved placeholder
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the sheet holds only the placeholder
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.len() <= 1
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::new()
    }
}
